//! Config command - show or initialize configuration

use crate::cli::args::{ConfigAction, ConfigArgs};
use crate::config::{Config, ConfigManager};
use crate::error::BoardResult;
use crate::ui::{self, Tone, UiContext};

/// Execute the config command
pub async fn execute(
    args: ConfigArgs,
    config: &Config,
    manager: &ConfigManager,
) -> BoardResult<()> {
    match args.action {
        None | Some(ConfigAction::Show) => show_config(config)?,
        Some(ConfigAction::Path) => println!("{}", manager.path().display()),
        Some(ConfigAction::Init { force }) => init_config(manager, force).await?,
    }

    Ok(())
}

fn show_config(config: &Config) -> BoardResult<()> {
    println!("{}", toml::to_string_pretty(config)?);
    Ok(())
}

async fn init_config(manager: &ConfigManager, force: bool) -> BoardResult<()> {
    let ctx = UiContext::detect();
    let path = manager.path();

    if path.exists() && !force {
        ui::status_detail(
            &ctx,
            Tone::Warn,
            "Config already exists",
            &path.display().to_string(),
        );
        ui::hint(&ctx, "Use --force to overwrite");
        return Ok(());
    }

    manager.save(&Config::default()).await?;

    ui::status_detail(
        &ctx,
        Tone::Ok,
        "Configuration initialized",
        &path.display().to_string(),
    );

    Ok(())
}
