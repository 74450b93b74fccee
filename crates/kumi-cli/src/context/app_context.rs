use std::path::{Path, PathBuf};

use anyhow::Context;
use kumi_config::{KumiConfig, PathsConfig};
use kumi_core::{CoreError, Corpus};
use kumi_engine::{Priorities, RankOptions, ScheduleOptions};

use crate::cli::{GlobalFlags, PathOverrides};
use crate::context::warn_missing;
use crate::progress::with_spinner;

/// Load configuration, honouring `--config`, and apply path flags.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<KumiConfig> {
    let mut config = KumiConfig::load_with_dotenv(flags.config.as_deref())
        .context("failed to load kumi configuration")?;
    apply_overrides(&mut config.paths, &flags.paths);
    Ok(config)
}

fn apply_overrides(paths: &mut PathsConfig, overrides: &PathOverrides) {
    let pairs: [(&mut PathBuf, &Option<PathBuf>); 4] = [
        (&mut paths.corpus, &overrides.corpus),
        (&mut paths.selection, &overrides.selection),
        (&mut paths.exclusion, &overrides.exclusion),
        (&mut paths.grades, &overrides.grade_file),
    ];
    for (slot, value) in pairs {
        if let Some(value) = value {
            slot.clone_from(value);
        }
    }
}

/// Resources shared by every command: configuration and the loaded corpus.
pub struct AppContext {
    pub config: KumiConfig,
    pub corpus: Corpus,
}

impl AppContext {
    pub fn init(config: KumiConfig) -> anyhow::Result<Self> {
        let corpus_path = config.paths.corpus.clone();
        let weights = config.weight_table();
        let corpus = with_spinner(
            "loading corpus",
            |corpus: &Corpus| format!("loaded {} entries", corpus.len()),
            || kumi_records::read_corpus(&corpus_path, &weights),
        )
        .with_context(|| format!("failed to read corpus {}", corpus_path.display()))?;
        Ok(Self { config, corpus })
    }

    pub fn corpus_path(&self) -> &Path {
        &self.config.paths.corpus
    }

    /// Selection, which must not be empty; symbols absent from the corpus
    /// are reported and kept.
    pub fn selection(&self) -> anyhow::Result<Vec<String>> {
        let paths = &self.config.paths;
        let sample = Some(paths.selection_sample.as_path());
        let selection = kumi_records::read_selection(&paths.selection, sample)
            .with_context(|| format!("failed to read selection {}", paths.selection.display()))?;
        if selection.is_empty() {
            return Err(CoreError::EmptySelection {
                source_name: paths.selection.display().to_string(),
            }
            .into());
        }
        warn_missing(&self.corpus, &selection, self.corpus_path());
        Ok(selection)
    }

    pub fn exclusions(&self) -> anyhow::Result<Vec<String>> {
        let paths = &self.config.paths;
        kumi_records::read_exclusions(&paths.exclusion, Some(paths.exclusion_sample.as_path()))
            .with_context(|| format!("failed to read exclusions {}", paths.exclusion.display()))
    }

    pub fn grades(&self) -> anyhow::Result<Priorities> {
        let path = &self.config.paths.grades;
        kumi_records::read_grades(path)
            .with_context(|| format!("failed to read grades {}", path.display()))
    }

    pub const fn rank_options(&self) -> RankOptions {
        RankOptions {
            parallel: self.config.general.parallel,
        }
    }

    pub const fn schedule_options(&self) -> ScheduleOptions {
        ScheduleOptions {
            parallel: self.config.general.parallel,
        }
    }
}
