use kumi_engine::{
    ComponentOrder, compute_buildable, rank_next_component, rank_next_component_by_grade,
};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::RankComponentsArgs;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::suggestions::suggestions_response;
use crate::context::AppContext;
use crate::output::output_rows;
use crate::progress::Progress;

/// Handle `kumi rank-components`.
pub fn handle(
    args: &RankComponentsArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let selection = ctx.selection()?;
    let excluded = ctx.exclusions()?;
    let order = if args.by_weight {
        ComponentOrder::Weight
    } else {
        ComponentOrder::Gain
    };

    let progress = Progress::spinner("ranking next components");
    let baseline = compute_buildable(&ctx.corpus, &selection, &excluded);
    let ranked = if args.by_grade {
        let grades = ctx.grades()?;
        rank_next_component_by_grade(
            &ctx.corpus,
            &selection,
            &excluded,
            Some(&baseline),
            &grades,
            ctx.rank_options(),
        )
    } else {
        rank_next_component(
            &ctx.corpus,
            &selection,
            &excluded,
            Some(&baseline),
            order,
            ctx.rank_options(),
        )
    };
    progress.finish_clear();

    if ranked.is_empty() {
        tracing::info!("no component would unlock additional buildable entries");
    }
    let limit = effective_limit(flags.limit, ctx.config.general.default_limit);
    let response = suggestions_response(&ranked, limit);
    output_rows(&response, &response.suggestions, flags.format)
}
