use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Buildable => commands::buildable::handle(ctx, flags),
        Commands::RankSymbols(args) => commands::rank_symbols::handle(&args, ctx, flags),
        Commands::RankComponents(args) => commands::rank_components::handle(&args, ctx, flags),
        Commands::Schedule(args) => commands::schedule::handle(&args, ctx, flags),
        Commands::Inventory(args) => commands::inventory::handle(&args, ctx, flags),
        Commands::Schema(args) => commands::schema::handle(&args, flags),
    }
}
