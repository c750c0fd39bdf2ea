//! followboard CLI entry point

use clap::Parser;
use console::style;
use followboard::cli::{commands, Cli, Commands, LogFormat};
use followboard::config::ConfigManager;
use followboard::error::BoardResult;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> BoardResult<()> {
    let cli = Cli::parse();

    // 0 = warn (progress lines only), 1 = info, 2+ = debug
    let filter = match cli.verbose {
        0 => EnvFilter::new("followboard=warn"),
        1 => EnvFilter::new("followboard=info"),
        _ => EnvFilter::new("followboard=debug"),
    };

    match cli.log_format {
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .without_time()
            .init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(false)
            .init(),
    }

    followboard::ui::init_theme();

    // Neither needs a config file
    match cli.command {
        Commands::Init(args) => return commands::init(args).await,
        Commands::Completions(args) => {
            commands::completions(args);
            return Ok(());
        }
        _ => {}
    }

    let manager = match cli.config {
        Some(ref path) => ConfigManager::with_path(path.clone()),
        None => ConfigManager::new(),
    };
    debug!("Using config {}", manager.path().display());

    let config = manager.load().await?;

    match cli.command {
        Commands::Init(_) | Commands::Completions(_) => unreachable!("handled above"),
        Commands::Build(args) => commands::build(args, &config).await,
        Commands::Config(args) => commands::config(args, &config, &manager).await,
        Commands::Cache(args) => commands::cache(args, &config).await,
    }
}
