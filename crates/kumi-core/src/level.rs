//! Category levels and the weight table used to value entries.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Weight of an entry whose level is blank or not in the table.
pub const DEFAULT_WEIGHT: u32 = 1;

/// Literal rendered in reports for a blank level.
pub const NO_LEVEL: &str = "None";

/// Built-in JLPT tiers, easiest first.
const DEFAULT_TIERS: [(&str, u32); 5] =
    [("N5", 100), ("N4", 70), ("N3", 40), ("N2", 20), ("N1", 10)];

/// Level name to weight mapping.
///
/// Level names are matched case-insensitively. Unknown levels fall back to
/// [`DEFAULT_WEIGHT`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightTable {
    tiers: BTreeMap<String, u32>,
}

impl Default for WeightTable {
    fn default() -> Self {
        Self {
            tiers: DEFAULT_TIERS
                .iter()
                .map(|(level, weight)| ((*level).to_string(), *weight))
                .collect(),
        }
    }
}

impl WeightTable {
    /// Replace or add tier weights. Keys are normalized to upper case.
    #[must_use]
    pub fn with_overrides<I, K>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, u32)>,
        K: AsRef<str>,
    {
        for (level, weight) in overrides {
            let key = normalize(level.as_ref());
            if !key.is_empty() {
                self.tiers.insert(key, weight);
            }
        }
        self
    }

    /// Weight for a level, [`DEFAULT_WEIGHT`] when unknown.
    #[must_use]
    pub fn weight_for(&self, level: &str) -> u32 {
        self.tiers
            .get(&normalize(level))
            .copied()
            .unwrap_or(DEFAULT_WEIGHT)
    }
}

/// Level as written in reports: blank levels become [`NO_LEVEL`].
#[must_use]
pub fn display_level(level: &str) -> &str {
    if level.is_empty() { NO_LEVEL } else { level }
}

fn normalize(level: &str) -> String {
    level.trim().to_uppercase()
}
