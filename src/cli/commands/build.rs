//! Build command - resolve every list and write the report

use crate::cli::args::BuildArgs;
use crate::config::Config;
use crate::error::BoardResult;
use crate::pipeline::{Pipeline, RunSummary};
use crate::ui::{self, Tone, UiContext};

/// Execute the build command
pub async fn execute(args: BuildArgs, config: &Config) -> BoardResult<()> {
    let ctx = UiContext::detect();
    let config = apply_overrides(config, &args);

    ui::banner(&ctx, "followboard");

    let mut pipeline = Pipeline::from_config(config, ctx.clone()).with_refresh(args.refresh);
    let summary = pipeline.run().await?;

    print_summary(&ctx, &summary);
    Ok(())
}

/// Command-line flags take precedence over the config file
fn apply_overrides(config: &Config, args: &BuildArgs) -> Config {
    let mut config = config.clone();
    if let Some(delay) = args.delay {
        config.fetch.delay_secs = delay;
    }
    if let Some(ref output) = args.output {
        config.output.document = output.clone();
    }
    config
}

fn print_summary(ctx: &UiContext, summary: &RunSummary) {
    ui::section(ctx, "Summary");
    ui::summary(
        ctx,
        &[
            ("Requested", summary.total_requested.to_string()),
            ("Succeeded", summary.succeeded.to_string()),
            ("Failed", summary.failed.to_string()),
            ("From cache", summary.from_cache.to_string()),
            ("Report", summary.document.display().to_string()),
            ("Avatars", summary.assets_dir.display().to_string()),
        ],
    );

    if summary.failed > 0 {
        ui::hint(ctx, "Unresolved identifiers are looked up again on the next run");
        ui::finish(
            ctx,
            Tone::Warn,
            &format!("Report written with {} unresolved identifiers", summary.failed),
        );
    } else {
        ui::finish(ctx, Tone::Ok, "Report written");
    }
}
