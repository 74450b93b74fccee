//! Input and output file locations, relative to the working directory unless
//! absolute.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct PathsConfig {
    pub corpus: PathBuf,
    pub selection: PathBuf,
    /// Read when `selection` does not exist.
    pub selection_sample: PathBuf,
    pub exclusion: PathBuf,
    /// Read when `exclusion` does not exist.
    pub exclusion_sample: PathBuf,
    pub grades: PathBuf,
    pub order_output: PathBuf,
    pub log_output: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            corpus: "heisig-kanjis.csv".into(),
            selection: "kanji-selection.csv".into(),
            selection_sample: "kanji-selection.sample.csv".into(),
            exclusion: "exclusion-list.csv".into(),
            exclusion_sample: "exclusion-list.sample.csv".into(),
            grades: "kanji-grades.csv".into(),
            order_output: "kanji-learning-order.csv".into(),
            log_output: "component-introduction-log.csv".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::PathsConfig;

    #[test]
    fn defaults_name_working_directory_files() {
        let paths = PathsConfig::default();
        assert_eq!(paths.corpus, Path::new("heisig-kanjis.csv"));
        assert_eq!(paths.order_output, Path::new("kanji-learning-order.csv"));
        assert_eq!(paths.log_output, Path::new("component-introduction-log.csv"));
    }
}
