use kumi_core::KnownSet;
use kumi_core::responses::BuildableResponse;
use kumi_engine::compute_buildable;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `kumi buildable`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let selection = ctx.selection()?;
    let excluded = ctx.exclusions()?;
    let result = compute_buildable(&ctx.corpus, &selection, &excluded);

    let missing = ctx
        .corpus
        .missing(&selection)
        .into_iter()
        .map(ToString::to_string)
        .collect();
    let buildable = result
        .buildable
        .iter()
        .map(|entry| entry.symbol.clone())
        .collect();
    let response = BuildableResponse {
        missing,
        excluded: excluded.into_iter().collect::<KnownSet>().into_vec(),
        components: result.components.into_vec(),
        buildable,
    };
    output(&response, flags.format)
}
