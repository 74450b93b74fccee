use kumi_engine::{Priorities, compute_buildable, rank_next_symbol};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::RankSymbolsArgs;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::suggestions::suggestions_response;
use crate::context::AppContext;
use crate::output::output_rows;
use crate::progress::Progress;

/// Handle `kumi rank-symbols`.
pub fn handle(args: &RankSymbolsArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let selection = ctx.selection()?;
    let excluded = ctx.exclusions()?;
    let priorities = if args.grades {
        ctx.grades()?
    } else {
        Priorities::new()
    };

    let progress = Progress::spinner("ranking next symbols");
    let baseline = compute_buildable(&ctx.corpus, &selection, &excluded);
    let ranked = rank_next_symbol(
        &ctx.corpus,
        &selection,
        &excluded,
        Some(&baseline),
        &priorities,
        ctx.rank_options(),
    );
    progress.finish_clear();

    if ranked.is_empty() {
        tracing::info!("no candidate symbol would unlock additional buildable entries");
    }
    let limit = effective_limit(flags.limit, ctx.config.general.default_limit);
    let response = suggestions_response(&ranked, limit);
    output_rows(&response, &response.suggestions, flags.format)
}
