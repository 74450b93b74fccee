//! Flattened report rows handed to the writing collaborators.
//!
//! Field order and names are part of the external contract: the CSV writers
//! emit them in exactly this order.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `introduced_by` tag of the first flush, which needed no new component.
pub const INITIAL_BATCH: &str = "INITIAL";

/// Separator used when a component list is written as one field.
pub const COMPONENT_SEPARATOR: &str = "; ";

/// One row of the learning order.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ScheduleRow {
    /// 1-based position in the schedule.
    pub position: usize,
    pub symbol: String,
    pub label: String,
    /// Level, `None` when blank.
    pub level: String,
    pub weight: u32,
    pub introduced_by: String,
    /// Direct components joined with [`COMPONENT_SEPARATOR`].
    pub components: String,
}

/// One component introduction chosen by the scheduler.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct IntroductionRecord {
    /// Running counter starting at 1.
    pub order: usize,
    pub component: String,
    pub total_weight: u64,
    pub unlocked_count: usize,
}

/// One ranked candidate with the symbols it would make buildable.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SuggestionRow {
    pub candidate: String,
    pub gain: usize,
    /// Sum of the weights of the gained entries.
    pub weight: u64,
    pub gained: Vec<String>,
}

#[must_use]
pub fn join_components<S: AsRef<str>>(components: &[S]) -> String {
    components
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(COMPONENT_SEPARATOR)
}
