//! General run settings.

use serde::{Deserialize, Serialize};

/// Default number of suggestions shown.
const fn default_limit() -> usize {
    20
}

const fn default_parallel() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct GeneralConfig {
    /// Evaluate ranking and scheduling candidates on the rayon pool.
    #[serde(default = "default_parallel")]
    pub parallel: bool,

    /// Default suggestion limit for the ranking commands.
    #[serde(default = "default_limit")]
    pub default_limit: usize,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            parallel: default_parallel(),
            default_limit: default_limit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert!(config.parallel);
        assert_eq!(config.default_limit, 20);
    }
}
