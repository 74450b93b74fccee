use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// List the closure of the selection and the entries it can build.
    Buildable,
    /// Rank the next symbol to learn by how many entries it unlocks.
    RankSymbols(RankSymbolsArgs),
    /// Rank the next component to learn by how many entries it unlocks.
    RankComponents(RankComponentsArgs),
    /// Order the whole corpus and write the learning order and introduction log.
    Schedule(ScheduleArgs),
    /// Components of every selected target, and what one more component unlocks.
    Inventory(InventoryArgs),
    /// Print the JSON schema of a report type.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct RankSymbolsArgs {
    /// Order candidates by the grade file before gain
    #[arg(long)]
    pub grades: bool,
}

#[derive(Clone, Debug, Args)]
pub struct RankComponentsArgs {
    /// Order by the summed weight of the unlocked entries instead of their count
    #[arg(long, conflicts_with = "by_grade")]
    pub by_weight: bool,

    /// Order by grade points of the unlocked entries, read from the grade file
    #[arg(long)]
    pub by_grade: bool,
}

#[derive(Clone, Debug, Args)]
pub struct ScheduleArgs {
    /// Learning order CSV to write
    #[arg(long, value_name = "FILE")]
    pub order_output: Option<PathBuf>,

    /// Component introduction log CSV to write
    #[arg(long, value_name = "FILE")]
    pub log_output: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct InventoryArgs {
    /// Component to introduce on top of the targets' components
    pub component: String,
}

/// Report types with a published JSON schema.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaType {
    Entry,
    ScheduleRow,
    IntroductionRecord,
    SuggestionRow,
    Buildable,
    Suggestions,
    Schedule,
    Inventory,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    #[arg(value_enum)]
    pub type_name: SchemaType,
}
