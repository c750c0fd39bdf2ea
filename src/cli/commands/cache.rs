//! Cache command - inspect and clean the profile cache

use crate::cli::args::{CacheAction, CacheArgs, OutputFormat};
use crate::config::Config;
use crate::error::BoardResult;
use crate::profile::{ProfileCache, ProfileRecord};
use crate::ui::{self, Tone, UiContext};
use console::style;

/// Execute the cache command
pub async fn execute(args: CacheArgs, config: &Config) -> BoardResult<()> {
    let cache = ProfileCache::load(config.output.cache_file.clone()).await;

    match args.action {
        CacheAction::List { format } => list_profiles(&cache, format),
        CacheAction::Prune => prune_profiles(cache).await,
        CacheAction::Clear { yes } => clear_profiles(cache, yes).await,
    }
}

fn list_profiles(cache: &ProfileCache, format: OutputFormat) -> BoardResult<()> {
    let records: Vec<&ProfileRecord> = cache.iter().collect();

    if records.is_empty() {
        match format {
            OutputFormat::Json => println!("[]"),
            OutputFormat::Plain => {}
            OutputFormat::Table => {
                let ctx = UiContext::detect();
                ui::status(&ctx, Tone::Info, "No cached profiles");
            }
        }
        return Ok(());
    }

    match format {
        OutputFormat::Table => print_table(&records),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&records)?),
        OutputFormat::Plain => {
            for record in &records {
                println!("{}", record.identifier);
            }
        }
    }

    Ok(())
}

fn print_table(records: &[&ProfileRecord]) {
    println!(
        "{:<30} {:<10} {:<8} {:<30}",
        "IDENTIFIER", "STATUS", "PRIVATE", "NAME"
    );
    println!("{}", "-".repeat(80));

    for record in records {
        let status = if record.resolved {
            style("resolved").green().to_string()
        } else {
            style("failed").red().to_string()
        };
        let private = if record.is_private { "yes" } else { "no" };
        let name = if record.display_name.is_empty() {
            "-"
        } else {
            record.display_name.as_str()
        };

        println!(
            "{:<30} {:<19} {:<8} {:<30}",
            truncate(&record.identifier, 30),
            status,
            private,
            truncate(name, 30)
        );
    }

    let failed = records.iter().filter(|r| !r.resolved).count();
    println!();
    println!("{} profiles, {} failed", records.len(), failed);
}

async fn prune_profiles(mut cache: ProfileCache) -> BoardResult<()> {
    let ctx = UiContext::detect();
    let removed = cache.prune_unresolved();

    if removed == 0 {
        ui::status(&ctx, Tone::Info, "No failed lookups to prune");
        return Ok(());
    }

    cache.persist().await?;
    ui::status(&ctx, Tone::Ok, &format!("Pruned {} failed lookups", removed));
    Ok(())
}

async fn clear_profiles(mut cache: ProfileCache, yes: bool) -> BoardResult<()> {
    let ctx = UiContext::detect().with_auto_yes(yes);

    if cache.is_empty() {
        ui::status(&ctx, Tone::Info, "Cache is already empty");
        return Ok(());
    }

    let message = format!(
        "Delete {} cached profiles from {}?",
        cache.len(),
        cache.path().display()
    );
    if !ui::confirm(&ctx, &message, false).await? {
        ui::status(&ctx, Tone::Info, "Cancelled");
        return Ok(());
    }

    let count = cache.len();
    cache.clear();
    cache.persist().await?;
    ui::status(&ctx, Tone::Ok, &format!("Removed {} cached profiles", count));
    Ok(())
}

/// Truncate to `max` characters, marking the cut with "..."
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
