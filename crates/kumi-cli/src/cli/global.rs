use std::path::PathBuf;

use clap::{Args, ValueEnum};

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Raw,
}

/// Input file overrides, applied on top of the `[paths]` configuration.
#[derive(Args, Clone, Debug, Default, PartialEq, Eq)]
pub struct PathOverrides {
    /// Corpus CSV (kanji, components, keywords, jlpt)
    #[arg(long, global = true, value_name = "FILE")]
    pub corpus: Option<PathBuf>,

    /// Selection CSV with a `kanji` column
    #[arg(long, global = true, value_name = "FILE")]
    pub selection: Option<PathBuf>,

    /// Exclusion list, one symbol per line
    #[arg(long, global = true, value_name = "FILE")]
    pub exclusion: Option<PathBuf>,

    /// Grade CSV with `kanji` and `grade` columns
    #[arg(long, global = true, value_name = "FILE")]
    pub grade_file: Option<PathBuf>,
}

/// Global flags available before or after subcommands.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub limit: Option<usize>,
    pub quiet: bool,
    pub verbose: bool,
    pub config: Option<PathBuf>,
    pub paths: PathOverrides,
}
