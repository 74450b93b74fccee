//! # kumi-config
//!
//! Layered configuration loading for kumi using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`KUMI_*` prefix, `__` as separator)
//! 2. An extra file passed on the command line
//! 3. Project-level `kumi.toml`
//! 4. User-level `~/.config/kumi/config.toml`
//! 5. Built-in defaults
//!
//! Figment maps `KUMI_PATHS__CORPUS` -> `paths.corpus` and
//! `KUMI_WEIGHTS__N3` -> `weights.N3`.
//!
//! ```no_run
//! use kumi_config::KumiConfig;
//!
//! let config = KumiConfig::load_with_dotenv(None).expect("config");
//! println!("corpus: {}", config.paths.corpus.display());
//! ```

mod error;
mod general;
mod paths;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use paths::PathsConfig;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use kumi_core::WeightTable;
use serde::{Deserialize, Serialize};

/// Project-level config file name, looked up in the working directory.
pub const PROJECT_FILE: &str = "kumi.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct KumiConfig {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub general: GeneralConfig,
    /// Level -> weight overrides on top of the built-in tiers.
    #[serde(default)]
    pub weights: BTreeMap<String, u32>,
}

impl KumiConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a source fails to parse or a value is invalid.
    pub fn load(extra: Option<&Path>) -> Result<Self, ConfigError> {
        let config: Self = Self::figment(extra).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv(extra: Option<&Path>) -> Result<Self, ConfigError> {
        // A missing .env is not an error.
        let _ = dotenvy::dotenv();
        Self::load(extra)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or add providers on top.
    #[must_use]
    pub fn figment(extra: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(PROJECT_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        if let Some(extra) = extra {
            figment = figment.merge(Toml::file(extra));
        }

        figment.merge(Env::prefixed("KUMI_").split("__"))
    }

    /// Built-in weight tiers with the configured overrides applied.
    #[must_use]
    pub fn weight_table(&self) -> WeightTable {
        WeightTable::default().with_overrides(
            self.weights
                .iter()
                .map(|(level, weight)| (level.as_str(), *weight)),
        )
    }

    /// Reject values that load cleanly but cannot be used.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.general.default_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "general.default_limit".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        if let Some(level) = self.weights.keys().find(|level| level.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: format!("weights.{level}"),
                reason: "level name is blank".to_string(),
            });
        }
        if self.paths.corpus.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "paths.corpus".to_string(),
                reason: "path is empty".to_string(),
            });
        }
        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("kumi").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = KumiConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.weights.is_empty());
        assert_eq!(config.weight_table(), WeightTable::default());
    }

    #[test]
    fn zero_limit_is_rejected() {
        let mut config = KumiConfig::default();
        config.general.default_limit = 0;
        let err = config.validate().expect_err("zero limit");
        assert!(err.to_string().contains("general.default_limit"));
    }

    #[test]
    fn weight_overrides_reach_the_table() {
        let mut config = KumiConfig::default();
        config.weights.insert("n2".to_string(), 33);
        let table = config.weight_table();
        assert_eq!(table.weight_for("N2"), 33);
        assert_eq!(table.weight_for("N5"), 100);
        assert_eq!(table.weight_for("N9"), 1);
    }
}
