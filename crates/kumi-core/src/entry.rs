use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::level::{DEFAULT_WEIGHT, WeightTable};

/// A corpus symbol together with its direct decomposition.
///
/// `components` may name symbols that are absent from the corpus; those are
/// primitive components, not errors.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Entry {
    pub symbol: String,
    /// Human-readable glosses, deduplicated in insertion order.
    pub labels: Vec<String>,
    pub components: Vec<String>,
    /// Category level as read (e.g. `N3`), empty when unknown.
    #[serde(default)]
    pub level: String,
    pub weight: u32,
}

impl Entry {
    /// Entry with no labels, no level and the default weight.
    ///
    /// Blank components are dropped.
    #[must_use]
    pub fn new<S, I, C>(symbol: S, components: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = C>,
        C: Into<String>,
    {
        Self {
            symbol: symbol.into(),
            labels: Vec::new(),
            components: components
                .into_iter()
                .map(Into::into)
                .filter(|component: &String| !component.trim().is_empty())
                .collect(),
            level: String::new(),
            weight: DEFAULT_WEIGHT,
        }
    }

    /// Entry with no direct components.
    #[must_use]
    pub fn primitive(symbol: impl Into<String>) -> Self {
        Self::new(symbol, std::iter::empty::<String>())
    }

    /// Append labels, skipping blanks and ones already present.
    #[must_use]
    pub fn with_labels<I, L>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        for label in labels {
            let label = label.into();
            if !label.trim().is_empty() && !self.labels.contains(&label) {
                self.labels.push(label);
            }
        }
        self
    }

    /// Set the level and derive the weight from `table`.
    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>, table: &WeightTable) -> Self {
        self.level = level.into();
        self.weight = table.weight_for(&self.level);
        self
    }

    #[must_use]
    pub const fn with_weight(mut self, weight: u32) -> Self {
        self.weight = weight;
        self
    }

    /// First label, or the empty string.
    #[must_use]
    pub fn primary_label(&self) -> &str {
        self.labels.first().map_or("", String::as_str)
    }

    /// Whether the entry has no direct components.
    #[must_use]
    pub fn is_primitive(&self) -> bool {
        self.components.is_empty()
    }
}
