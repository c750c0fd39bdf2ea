//! Integration tests for followboard

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use std::path::Path;
    use tempfile::TempDir;

    fn followboard(dir: &Path) -> Command {
        let mut cmd = cargo_bin_cmd!("followboard");
        cmd.current_dir(dir)
            .env_remove("FOLLOWBOARD_CONFIG")
            .env("FOLLOWBOARD_PLAIN", "1");
        cmd
    }

    #[test]
    fn help_displays() {
        let dir = TempDir::new().unwrap();
        followboard(dir.path())
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("follow-list report generator"));
    }

    #[test]
    fn version_displays() {
        let dir = TempDir::new().unwrap();
        followboard(dir.path())
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("followboard"));
    }

    #[test]
    fn config_path() {
        let dir = TempDir::new().unwrap();
        followboard(dir.path())
            .args(["config", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains("followboard.toml"));
    }

    #[test]
    fn config_show_defaults() {
        let dir = TempDir::new().unwrap();
        followboard(dir.path())
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[fetch]"))
            .stdout(predicate::str::contains("delay_secs = 5"));
    }

    #[test]
    fn invalid_config_fails_with_hint() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("followboard.toml"), "[fetch\n").unwrap();

        followboard(dir.path())
            .args(["config", "show"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Error:"))
            .stderr(predicate::str::contains("Hint:"));
    }

    #[test]
    fn init_creates_files() {
        let dir = TempDir::new().unwrap();
        followboard(dir.path()).arg("init").assert().success();

        assert!(dir.path().join("followboard.toml").is_file());
        assert!(dir.path().join("sponsors.txt").is_file());
        assert!(dir.path().join("developers.txt").is_file());
        assert!(dir.path().join("users.txt").is_file());

        followboard(dir.path())
            .arg("init")
            .assert()
            .failure()
            .stderr(predicate::str::contains("already exists"));
    }

    #[test]
    fn cache_list_empty() {
        let dir = TempDir::new().unwrap();
        followboard(dir.path())
            .args(["cache", "list", "--format", "json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[]"));
    }

    #[test]
    fn build_with_empty_lists_writes_report() {
        let dir = TempDir::new().unwrap();
        followboard(dir.path()).arg("init").assert().success();

        followboard(dir.path())
            .args(["build", "--delay", "0"])
            .assert()
            .success();

        let html = std::fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert!(html.contains("No entries"));
        assert!(dir.path().join("assets").join("default.svg").is_file());
    }

    #[test]
    fn completions_bash() {
        let dir = TempDir::new().unwrap();
        followboard(dir.path())
            .args(["completions", "bash"])
            .assert()
            .success()
            .stdout(predicate::str::contains("followboard"));
    }
}

mod pipeline_tests {
    use async_trait::async_trait;
    use followboard::avatar::ImageFetcher;
    use followboard::config::Config;
    use followboard::pipeline::Pipeline;
    use followboard::profile::{LookupError, ProfileCache, ProfileProvider, ProviderProfile};
    use followboard::ui::UiContext;
    use followboard::{BoardError, BoardResult};
    use std::path::Path;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    /// Provider that resolves a fixed set of identifiers
    #[derive(Clone)]
    struct FixedProvider {
        known: Vec<&'static str>,
        calls: Arc<Mutex<Vec<String>>>,
    }

    impl FixedProvider {
        fn new(known: &[&'static str]) -> Self {
            Self {
                known: known.to_vec(),
                calls: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ProfileProvider for FixedProvider {
        async fn lookup(&self, identifier: &str) -> Result<ProviderProfile, LookupError> {
            self.calls.lock().unwrap().push(identifier.to_string());
            if !self.known.contains(&identifier) {
                return Err(LookupError::NotFound(identifier.to_string()));
            }
            Ok(ProviderProfile {
                display_name: format!("{} <Display>", identifier),
                is_private: identifier.starts_with("priv"),
                avatar_url: Some(format!("https://cdn.example/{}.jpg", identifier)),
            })
        }

        fn provider_name(&self) -> &'static str {
            "fixed"
        }
    }

    /// Fetcher that can be switched into failure mode
    #[derive(Clone, Default)]
    struct SwitchFetcher {
        failing: Arc<AtomicBool>,
    }

    #[async_trait]
    impl ImageFetcher for SwitchFetcher {
        async fn fetch(&self, url: &str) -> BoardResult<Vec<u8>> {
            if self.failing.load(Ordering::SeqCst) {
                return Err(BoardError::image_fetch(url, "unreachable"));
            }
            Ok(b"\xff\xd8jpeg".to_vec())
        }
    }

    fn config_in(root: &Path) -> Config {
        let mut config = Config::default();
        config.lists.sponsors = root.join("sponsors.txt");
        config.lists.developers = root.join("developers.txt");
        config.lists.participants = root.join("users.txt");
        config.output.document = root.join("index.html");
        config.output.assets_dir = root.join("assets");
        config.output.cache_file = root.join("cache.json");
        config.fetch.delay_secs = 0;
        config
    }

    fn pipeline(root: &Path, provider: &FixedProvider, fetcher: &SwitchFetcher) -> Pipeline {
        Pipeline::new(
            config_in(root),
            Box::new(provider.clone()),
            Box::new(fetcher.clone()),
            UiContext::non_interactive(),
        )
    }

    fn without_timestamp(html: &str) -> String {
        html.lines()
            .filter(|line| !line.contains("Last updated:"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[tokio::test]
    async fn one_good_one_bad_identifier() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("users.txt"), "bob\ncarol\n").unwrap();
        let provider = FixedProvider::new(&["bob"]);

        let summary = pipeline(dir.path(), &provider, &SwitchFetcher::default())
            .run()
            .await
            .unwrap();

        assert_eq!(summary.succeeded, 1);
        assert_eq!(summary.failed, 1);
        assert!(dir.path().join("assets/bob.jpg").is_file());
        assert!(!dir.path().join("assets/carol.jpg").exists());

        let html = std::fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert!(html.contains("bob &lt;Display&gt;"));
        assert!(html.contains("user-card failed"));
        assert!(html.contains("Participants (2)"));

        let cache = ProfileCache::load(dir.path().join("cache.json")).await;
        assert!(cache.get("bob").unwrap().resolved);
        assert!(!cache.get("carol").unwrap().resolved);
    }

    #[tokio::test]
    async fn rerun_is_served_from_cache_and_stable() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("sponsors.txt"), "acme\n").unwrap();
        std::fs::write(dir.path().join("users.txt"), "alice\nprivbob\n").unwrap();
        let provider = FixedProvider::new(&["acme", "alice", "privbob"]);
        let fetcher = SwitchFetcher::default();

        pipeline(dir.path(), &provider, &fetcher).run().await.unwrap();
        let first = std::fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert_eq!(provider.calls().len(), 3);

        let mut second = pipeline(dir.path(), &provider, &fetcher);
        let summary = second.run().await.unwrap();
        let again = std::fs::read_to_string(dir.path().join("index.html")).unwrap();

        assert_eq!(provider.calls().len(), 3);
        assert_eq!(summary.from_cache, 3);
        assert_eq!(second.pacer().intervals(), 0);
        assert_eq!(without_timestamp(&first), without_timestamp(&again));
    }

    #[tokio::test]
    async fn failed_lookups_are_retried() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("users.txt"), "carol\n").unwrap();
        let provider = FixedProvider::new(&[]);
        let fetcher = SwitchFetcher::default();

        pipeline(dir.path(), &provider, &fetcher).run().await.unwrap();
        pipeline(dir.path(), &provider, &fetcher).run().await.unwrap();

        assert_eq!(provider.calls(), vec!["carol", "carol"]);
    }

    #[tokio::test]
    async fn missing_avatar_forces_lookup() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("users.txt"), "bob\n").unwrap();
        let provider = FixedProvider::new(&["bob"]);
        let fetcher = SwitchFetcher::default();

        pipeline(dir.path(), &provider, &fetcher).run().await.unwrap();
        std::fs::remove_file(dir.path().join("assets/bob.jpg")).unwrap();
        pipeline(dir.path(), &provider, &fetcher).run().await.unwrap();

        assert_eq!(provider.calls(), vec!["bob", "bob"]);
        assert!(dir.path().join("assets/bob.jpg").is_file());
    }

    #[tokio::test]
    async fn avatar_failure_degrades_to_placeholder() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("users.txt"), "bob\n").unwrap();
        let provider = FixedProvider::new(&["bob"]);
        let fetcher = SwitchFetcher::default();
        fetcher.failing.store(true, Ordering::SeqCst);

        let summary = pipeline(dir.path(), &provider, &fetcher).run().await.unwrap();

        assert_eq!(summary.succeeded, 1);
        assert!(!dir.path().join("assets/bob.jpg").exists());
        let html = std::fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert!(html.contains("assets/default.svg"));
    }

    #[tokio::test]
    async fn card_counts_match_requests() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("sponsors.txt"), "s1\nx\n").unwrap();
        std::fs::write(dir.path().join("developers.txt"), "d1\n").unwrap();
        std::fs::write(dir.path().join("users.txt"), "u1\nu2\nghost\n").unwrap();
        let provider = FixedProvider::new(&["s1", "d1", "u1", "u2"]);

        let summary = pipeline(dir.path(), &provider, &SwitchFetcher::default())
            .run()
            .await
            .unwrap();

        assert_eq!(summary.total_requested, 6);
        assert_eq!(summary.succeeded + summary.failed, 6);

        let html = std::fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert_eq!(html.matches("class=\"user-card").count(), 6);
        assert!(html.contains("Sponsors (2)"));
        assert!(html.contains("Participants (4)"));
    }

    #[tokio::test(start_paused = true)]
    async fn provider_calls_are_paced() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("users.txt"), "a\nb\nc\nd\n").unwrap();
        let provider = FixedProvider::new(&["a", "b", "c", "d"]);

        let mut config = config_in(dir.path());
        config.fetch.delay_secs = 5;
        let mut run = Pipeline::new(
            config,
            Box::new(provider.clone()),
            Box::new(SwitchFetcher::default()),
            UiContext::non_interactive(),
        );

        let start = tokio::time::Instant::now();
        run.run().await.unwrap();

        assert_eq!(run.pacer().intervals(), 3);
        assert!(start.elapsed() >= std::time::Duration::from_secs(15));
    }
}
