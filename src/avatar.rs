//! Local avatar mirror
//!
//! Avatars live at `<assets_dir>/<identifier>.jpg`. A file that already
//! exists is never fetched again. Failed downloads leave nothing behind;
//! the rendered card falls back to the placeholder through its `onerror`
//! handler.

use crate::config::schema::FetchConfig;
use crate::error::{BoardError, BoardResult};
use crate::fsutil;
use crate::profile::ProfileRecord;
use async_trait::async_trait;
use std::path::PathBuf;
use std::time::Duration;
use tokio::fs;
use tracing::{debug, info, warn};

/// File name of the fallback image inside the assets directory
pub const PLACEHOLDER_FILE: &str = "default.svg";

const PLACEHOLDER_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100">
  <circle cx="50" cy="50" r="50" fill="#e0e0e0"/>
  <circle cx="50" cy="38" r="18" fill="#bdbdbd"/>
  <ellipse cx="50" cy="85" rx="30" ry="25" fill="#bdbdbd"/>
</svg>
"##;

/// Avatar file name for an identifier
///
/// Characters outside `[A-Za-z0-9._-]` become `_` so an identifier can
/// never escape the assets directory.
pub fn avatar_file_name(identifier: &str) -> String {
    let stem: String = identifier
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();

    let stem = match stem.as_str() {
        "" | "." | ".." => stem.replace('.', "_") + "_",
        _ => stem,
    };

    format!("{}.jpg", stem)
}

/// What happened when an avatar was requested
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvatarOutcome {
    /// File was already on disk; no network call was made
    AlreadyPresent,
    /// File was downloaded and written
    Downloaded,
    /// Download failed; the placeholder will be shown
    Failed,
}

/// Image transport
#[async_trait]
pub trait ImageFetcher: Send + Sync {
    /// Fetch the bytes at `url`; only 2xx responses succeed
    async fn fetch(&self, url: &str) -> BoardResult<Vec<u8>>;
}

/// HTTP image fetcher with a bounded timeout
pub struct HttpImageFetcher {
    agent: ureq::Agent,
    user_agent: String,
}

impl HttpImageFetcher {
    pub fn new(fetch: &FetchConfig) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(fetch.image_timeout_secs)))
            .build()
            .into();

        Self {
            agent,
            user_agent: fetch.user_agent.clone(),
        }
    }
}

#[async_trait]
impl ImageFetcher for HttpImageFetcher {
    async fn fetch(&self, url: &str) -> BoardResult<Vec<u8>> {
        let agent = self.agent.clone();
        let user_agent = self.user_agent.clone();
        let url = url.to_string();

        tokio::task::spawn_blocking(move || {
            let mut response = agent
                .get(url.as_str())
                .header("User-Agent", user_agent.as_str())
                .call()
                .map_err(|e| BoardError::image_fetch(url.as_str(), e))?;

            response
                .body_mut()
                .read_to_vec()
                .map_err(|e| BoardError::image_fetch(url.as_str(), e))
        })
        .await
        .map_err(|e| BoardError::Internal(format!("image download task failed: {}", e)))?
    }
}

/// Owns the assets directory and the image transport
pub struct AvatarStore {
    dir: PathBuf,
    fetcher: Box<dyn ImageFetcher>,
}

impl AvatarStore {
    pub fn new(dir: impl Into<PathBuf>, fetcher: Box<dyn ImageFetcher>) -> Self {
        Self {
            dir: dir.into(),
            fetcher,
        }
    }

    /// Where the avatar for `identifier` is stored
    pub fn avatar_path(&self, identifier: &str) -> PathBuf {
        self.dir.join(avatar_file_name(identifier))
    }

    /// Whether an avatar for `identifier` is on disk
    pub fn has_avatar(&self, identifier: &str) -> bool {
        self.avatar_path(identifier).is_file()
    }

    /// Make sure the avatar for a resolved record exists locally
    pub async fn ensure_avatar(
        &self,
        record: &ProfileRecord,
        avatar_url: Option<&str>,
    ) -> AvatarOutcome {
        let path = self.avatar_path(&record.identifier);
        if path.is_file() {
            debug!("Avatar for {} already present", record.identifier);
            return AvatarOutcome::AlreadyPresent;
        }

        let Some(url) = avatar_url else {
            warn!("No avatar URL for {}", record.identifier);
            return AvatarOutcome::Failed;
        };

        let bytes = match self.fetcher.fetch(url).await {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("Avatar download for {} failed: {}", record.identifier, e);
                return AvatarOutcome::Failed;
            }
        };

        match fsutil::write_atomic(&path, &bytes).await {
            Ok(()) => {
                debug!("Saved avatar {} ({} bytes)", path.display(), bytes.len());
                AvatarOutcome::Downloaded
            }
            Err(e) => {
                warn!("Failed to write avatar {}: {}", path.display(), e);
                AvatarOutcome::Failed
            }
        }
    }

    /// Write the placeholder image if it is missing
    ///
    /// Returns `true` when the file was created by this call.
    pub async fn ensure_placeholder(&self) -> BoardResult<bool> {
        let path = self.dir.join(PLACEHOLDER_FILE);
        if path.is_file() {
            return Ok(false);
        }

        fs::write(&path, PLACEHOLDER_SVG)
            .await
            .map_err(|e| BoardError::io(format!("writing placeholder {}", path.display()), e))?;

        info!("Created placeholder image {}", path.display());
        Ok(true)
    }
}
