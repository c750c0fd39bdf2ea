//! Acquisition, cache and render pipeline
//!
//! One sequential pass: lists are loaded, every identifier is resolved in
//! category order (sponsors, developers, participants), avatars are
//! mirrored for resolved profiles, and the report is written. Only a
//! failed document write aborts the run; everything per identifier
//! degrades into a record instead.

use crate::avatar::{AvatarOutcome, AvatarStore, HttpImageFetcher, ImageFetcher};
use crate::config::schema::ListsConfig;
use crate::config::Config;
use crate::error::{BoardError, BoardResult};
use crate::fsutil;
use crate::lists;
use crate::pacer::Pacer;
use crate::profile::{
    ProfileCache, ProfileProvider, ProfileRecord, ProfileResolver, WebProfileProvider,
};
use crate::report::{ReportInput, ReportRenderer};
use crate::ui::{self, CategoryProgress, ItemStatus, TaskSpinner, Tone, UiContext};
use chrono::Local;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

/// Identifier list categories, in processing order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Sponsor,
    Developer,
    Participant,
}

impl Category {
    /// Fixed processing order
    pub const ORDER: [Category; 3] = [
        Category::Sponsor,
        Category::Developer,
        Category::Participant,
    ];

    /// Plural label used in console output
    pub fn label(&self) -> &'static str {
        match self {
            Category::Sponsor => "sponsors",
            Category::Developer => "developers",
            Category::Participant => "participants",
        }
    }

    /// List file for this category
    pub fn list_path<'a>(&self, lists: &'a ListsConfig) -> &'a Path {
        match self {
            Category::Sponsor => &lists.sponsors,
            Category::Developer => &lists.developers,
            Category::Participant => &lists.participants,
        }
    }
}

/// Identifiers loaded for each category
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryLists {
    pub sponsors: Vec<String>,
    pub developers: Vec<String>,
    pub participants: Vec<String>,
}

impl CategoryLists {
    /// Identifiers for a category
    pub fn get(&self, category: Category) -> &[String] {
        match category {
            Category::Sponsor => &self.sponsors,
            Category::Developer => &self.developers,
            Category::Participant => &self.participants,
        }
    }

    fn set(&mut self, category: Category, ids: Vec<String>) {
        match category {
            Category::Sponsor => self.sponsors = ids,
            Category::Developer => self.developers = ids,
            Category::Participant => self.participants = ids,
        }
    }

    /// Identifiers requested across all categories
    pub fn total(&self) -> usize {
        self.sponsors.len() + self.developers.len() + self.participants.len()
    }
}

/// What a finished run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub total_requested: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub from_cache: usize,
    pub document: PathBuf,
    pub assets_dir: PathBuf,
}

/// Owns every piece of run state: provider, avatar store, pacer
pub struct Pipeline {
    config: Config,
    provider: Box<dyn ProfileProvider>,
    avatars: AvatarStore,
    pacer: Pacer,
    ctx: UiContext,
    refresh: bool,
}

impl Pipeline {
    /// Create a pipeline with explicit provider and image transport
    pub fn new(
        config: Config,
        provider: Box<dyn ProfileProvider>,
        fetcher: Box<dyn ImageFetcher>,
        ctx: UiContext,
    ) -> Self {
        let avatars = AvatarStore::new(config.output.assets_dir.clone(), fetcher);
        let pacer = Pacer::new(Duration::from_secs(config.fetch.delay_secs));
        Self {
            config,
            provider,
            avatars,
            pacer,
            ctx,
            refresh: false,
        }
    }

    /// Create a pipeline backed by the HTTP provider and fetcher
    pub fn from_config(config: Config, ctx: UiContext) -> Self {
        let provider = WebProfileProvider::new(&config.provider, &config.fetch);
        let fetcher = HttpImageFetcher::new(&config.fetch);
        Self::new(config, Box::new(provider), Box::new(fetcher), ctx)
    }

    /// Ignore usable cache entries for this run
    pub fn with_refresh(mut self, refresh: bool) -> Self {
        self.refresh = refresh;
        self
    }

    /// Pacer state, for inspecting how many delays were applied
    pub fn pacer(&self) -> &Pacer {
        &self.pacer
    }

    /// Run the whole pipeline and write the report
    pub async fn run(&mut self) -> BoardResult<RunSummary> {
        self.prepare_output().await;

        let lists = self.load_lists().await;
        let tally: Vec<(&str, usize)> = Category::ORDER
            .iter()
            .map(|category| (category.label(), lists.get(*category).len()))
            .collect();
        ui::list_tally(&self.ctx, &tally);

        info!(
            "Resolving through {} with {:?} between lookups",
            self.provider.provider_name(),
            self.pacer.delay()
        );

        let mut cache = ProfileCache::load(self.config.output.cache_file.clone()).await;
        if !cache.is_empty() {
            let message = format!("Loaded {} cached profiles", cache.len());
            ui::status(&self.ctx, Tone::Info, &message);
        }

        let mut sponsors = Vec::new();
        let mut developers = Vec::new();
        let mut participants = Vec::new();
        let mut from_cache = 0;

        for (step, category) in Category::ORDER.into_iter().enumerate() {
            let ids = lists.get(category);
            ui::category_header(
                &self.ctx,
                step + 1,
                Category::ORDER.len(),
                category.label(),
                ids.len(),
            );
            let (records, hits) = self
                .resolve_category(category, ids, &mut cache)
                .await;
            from_cache += hits;

            match category {
                Category::Sponsor => sponsors = records,
                Category::Developer => developers = records,
                Category::Participant => participants = records,
            }
        }

        let succeeded = [&sponsors, &developers, &participants]
            .iter()
            .flat_map(|records| records.iter())
            .filter(|record| record.resolved)
            .count();
        let failed = lists.total() - succeeded;

        let mut merged = developers.clone();
        merged.extend(participants);

        let input = ReportInput {
            sponsors: &sponsors,
            developers: &developers,
            participants: &merged,
            total_requested: lists.total(),
        };
        self.write_report(&input).await?;

        info!(
            "Run complete: {} succeeded, {} failed, {} from cache",
            succeeded, failed, from_cache
        );

        Ok(RunSummary {
            total_requested: lists.total(),
            succeeded,
            failed,
            from_cache,
            document: self.config.output.document.clone(),
            assets_dir: self.config.output.assets_dir.clone(),
        })
    }

    /// Create output directories and the placeholder image; never fatal
    async fn prepare_output(&self) {
        let output = &self.config.output;
        let dirs = [
            Some(output.assets_dir.as_path()),
            output.document.parent(),
            output.cache_file.parent(),
        ];

        for dir in dirs.into_iter().flatten() {
            if let Err(e) = fsutil::ensure_dir(dir).await {
                warn!("Failed to create directory {}: {}", dir.display(), e);
            }
        }

        if let Err(e) = self.avatars.ensure_placeholder().await {
            warn!("Placeholder image unavailable: {}", e);
            ui::status(&self.ctx, Tone::Warn, "Placeholder image unavailable");
        }
    }

    /// Load all three lists; a failing list becomes empty
    async fn load_lists(&self) -> CategoryLists {
        let mut lists = CategoryLists::default();

        for category in Category::ORDER {
            let path = category.list_path(&self.config.lists);
            let ids = match lists::load_identifiers(path).await {
                Ok(ids) => ids,
                Err(e) => {
                    warn!("{}", e);
                    ui::status_detail(
                        &self.ctx,
                        Tone::Fail,
                        &format!("Could not read {} list", category.label()),
                        &path.display().to_string(),
                    );
                    vec![]
                }
            };
            lists.set(category, ids);
        }

        lists
    }

    /// Resolve one category in order, pacing between provider calls.
    ///
    /// Returns the records and the number of cache hits.
    async fn resolve_category(
        &mut self,
        category: Category,
        ids: &[String],
        cache: &mut ProfileCache,
    ) -> (Vec<ProfileRecord>, usize) {
        let progress = CategoryProgress::new(&self.ctx, category.label(), ids.len());
        let resolver =
            ProfileResolver::new(self.provider.as_ref(), &self.avatars).with_refresh(self.refresh);

        let mut records = Vec::with_capacity(ids.len());
        let mut hits = 0;

        for (i, id) in ids.iter().enumerate() {
            progress.start_item(i + 1, id);

            let resolution = resolver.resolve(cache, id).await;

            let (status, message) = if resolution.served_from_cache {
                hits += 1;
                (ItemStatus::Cached, format!("{} (cached)", id))
            } else if resolution.record.resolved {
                let outcome = self
                    .avatars
                    .ensure_avatar(&resolution.record, resolution.avatar_url.as_deref())
                    .await;
                match outcome {
                    AvatarOutcome::AlreadyPresent => {
                        (ItemStatus::Ok, format!("{} (avatar already present)", id))
                    }
                    AvatarOutcome::Downloaded => (ItemStatus::Ok, format!("{} (avatar saved)", id)),
                    AvatarOutcome::Failed => (
                        ItemStatus::Degraded,
                        format!("{} (avatar unavailable, placeholder used)", id),
                    ),
                }
            } else {
                (ItemStatus::Failed, format!("{} (lookup failed)", id))
            };
            progress.finish_item(status, &message);

            // No trailing wait after the last identifier of a category
            if i + 1 < ids.len() {
                self.pacer.wait(resolution.served_from_cache).await;
            }

            records.push(resolution.record);
        }

        progress.finish();
        (records, hits)
    }

    async fn write_report(&self, input: &ReportInput<'_>) -> BoardResult<()> {
        let document = &self.config.output.document;
        let mut spinner = TaskSpinner::new(&self.ctx);
        spinner.start(&format!("Rendering {}", document.display()));

        let html = ReportRenderer::from_config(&self.config).render(input, Local::now());

        match fsutil::write_atomic(document, html).await {
            Ok(()) => {
                spinner.stop(&format!("Wrote {}", document.display()));
                Ok(())
            }
            Err(e) => {
                spinner.stop_error(&format!("Could not write {}", document.display()));
                Err(BoardError::DocumentWrite {
                    path: document.clone(),
                    source: e,
                })
            }
        }
    }
}
