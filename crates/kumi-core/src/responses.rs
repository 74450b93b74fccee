//! CLI response types returned by `kumi` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::report::SuggestionRow;

/// Response from `kumi buildable`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct BuildableResponse {
    /// Selection symbols that are not in the corpus.
    pub missing: Vec<String>,
    pub excluded: Vec<String>,
    pub components: Vec<String>,
    /// Buildable symbols that are not already selected.
    pub buildable: Vec<String>,
}

/// Response from `kumi rank-symbols` and `kumi rank-components`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SuggestionsResponse {
    /// Number of candidates with a non-empty gain, before any limit.
    pub total: usize,
    pub suggestions: Vec<SuggestionRow>,
}

/// Response from `kumi schedule`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ScheduleResponse {
    pub scheduled: usize,
    pub introduced: usize,
    /// Entries the scheduler could not order, sorted by symbol.
    pub residual: Vec<String>,
    pub order_output: String,
    pub log_output: String,
}

/// Closure of one inventory target.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TargetComponents {
    pub target: String,
    pub components: Vec<String>,
}

/// A buildable entry listed by `kumi inventory`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct InventoryRow {
    pub symbol: String,
    pub label: String,
    pub level: String,
}

/// Response from `kumi inventory`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct InventoryResponse {
    pub targets: Vec<TargetComponents>,
    pub all_components: Vec<String>,
    pub new_component: String,
    pub allowed: Vec<String>,
    pub buildable: Vec<InventoryRow>,
}
