//! Init command - create followboard.toml and empty list files

use crate::cli::args::InitArgs;
use crate::config::schema::ListsConfig;
use crate::config::CONFIG_FILE_NAME;
use crate::error::{BoardError, BoardResult};
use crate::fsutil;
use crate::ui::{self, Tone, UiContext};
use tokio::fs;

/// Template for a new project config
const INIT_TEMPLATE: &str = r#"# followboard configuration
# Every key is optional; the values shown are the defaults.

[lists]
# sponsors = "sponsors.txt"
# developers = "developers.txt"
# participants = "users.txt"

[output]
# document = "index.html"
# assets_dir = "assets"
# cache_file = "cache.json"

[fetch]
# delay_secs = 5            # wait after every provider lookup
# image_timeout_secs = 10
# lookup_timeout_secs = 30

[report]
# title = "Follow list"
# lang = "en"
# footer = "Generated by followboard"
"#;

/// Header written into each new list file
const LIST_TEMPLATE: &str = "# One identifier per line. Blank lines and lines starting with # are ignored.\n";

/// Execute the init command
pub async fn execute(args: InitArgs) -> BoardResult<()> {
    let ctx = UiContext::detect();

    let target_dir = match args.path {
        Some(ref p) => p.clone(),
        None => {
            std::env::current_dir().map_err(|e| BoardError::io("getting current directory", e))?
        }
    };

    let config_path = target_dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !args.force {
        return Err(BoardError::User(format!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        )));
    }

    fsutil::ensure_dir(&target_dir)
        .await
        .map_err(|e| BoardError::io(format!("creating directory {}", target_dir.display()), e))?;

    fs::write(&config_path, INIT_TEMPLATE)
        .await
        .map_err(|e| BoardError::io(format!("writing {}", config_path.display()), e))?;

    ui::status_detail(
        &ctx,
        Tone::Ok,
        "Created config",
        &config_path.display().to_string(),
    );

    // Existing lists are never touched, even with --force
    let lists = ListsConfig::default();
    for list in [&lists.sponsors, &lists.developers, &lists.participants] {
        let path = target_dir.join(list);
        if path.exists() {
            ui::status_detail(&ctx, Tone::Info, "Keeping list", &path.display().to_string());
            continue;
        }

        fs::write(&path, LIST_TEMPLATE)
            .await
            .map_err(|e| BoardError::io(format!("writing {}", path.display()), e))?;
        ui::status_detail(&ctx, Tone::Ok, "Created list", &path.display().to_string());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::lists::parse_identifiers;
    use tempfile::TempDir;

    #[tokio::test]
    async fn init_creates_config_and_lists() {
        let temp = TempDir::new().unwrap();
        let args = InitArgs {
            force: false,
            path: Some(temp.path().to_path_buf()),
        };
        execute(args).await.unwrap();

        let content = std::fs::read_to_string(temp.path().join(CONFIG_FILE_NAME)).unwrap();
        assert!(content.contains("[lists]"));
        assert!(content.contains("[fetch]"));

        let users = std::fs::read_to_string(temp.path().join("users.txt")).unwrap();
        assert!(parse_identifiers(&users).is_empty());
        assert!(temp.path().join("sponsors.txt").is_file());
        assert!(temp.path().join("developers.txt").is_file());
    }

    #[tokio::test]
    async fn init_refuses_overwrite_without_force() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(CONFIG_FILE_NAME), "existing").unwrap();

        let args = InitArgs {
            force: false,
            path: Some(temp.path().to_path_buf()),
        };
        let err = execute(args).await.unwrap_err().to_string();
        assert!(err.contains("already exists"));
    }

    #[tokio::test]
    async fn force_keeps_existing_lists() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(CONFIG_FILE_NAME), "old").unwrap();
        std::fs::write(temp.path().join("users.txt"), "alice\n").unwrap();

        let args = InitArgs {
            force: true,
            path: Some(temp.path().to_path_buf()),
        };
        execute(args).await.unwrap();

        let users = std::fs::read_to_string(temp.path().join("users.txt")).unwrap();
        assert_eq!(users, "alice\n");
        let content = std::fs::read_to_string(temp.path().join(CONFIG_FILE_NAME)).unwrap();
        assert!(content.contains("[output]"));
    }

    #[test]
    fn template_parses_to_defaults() {
        let config: Config = toml::from_str(INIT_TEMPLATE).unwrap();
        assert_eq!(config.fetch.delay_secs, Config::default().fetch.delay_secs);
    }
}
