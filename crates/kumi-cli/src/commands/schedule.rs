use anyhow::Context;
use kumi_core::responses::ScheduleResponse;
use kumi_engine::build_schedule;
use kumi_records::{write_introductions, write_schedule};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ScheduleArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

/// Handle `kumi schedule`.
pub fn handle(args: &ScheduleArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let order_path = args
        .order_output
        .clone()
        .unwrap_or_else(|| ctx.config.paths.order_output.clone());
    let log_path = args
        .log_output
        .clone()
        .unwrap_or_else(|| ctx.config.paths.log_output.clone());

    let progress = Progress::spinner("ordering corpus");
    let schedule = build_schedule(&ctx.corpus, ctx.schedule_options());
    progress.finish_ok(&format!(
        "ordered {} of {} entries",
        schedule.entries.len(),
        ctx.corpus.len()
    ));

    write_schedule(&order_path, &schedule.rows())
        .with_context(|| format!("failed to write learning order {}", order_path.display()))?;
    write_introductions(&log_path, &schedule.introductions)
        .with_context(|| format!("failed to write introduction log {}", log_path.display()))?;

    let response = ScheduleResponse {
        scheduled: schedule.entries.len(),
        introduced: schedule.introductions.len(),
        residual: schedule
            .residual_symbols()
            .into_iter()
            .map(ToString::to_string)
            .collect(),
        order_output: order_path.display().to_string(),
        log_output: log_path.display().to_string(),
    };
    output(&response, flags.format)
}
