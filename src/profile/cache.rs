//! Durable profile cache
//!
//! A single JSON object mapping identifier to [`ProfileRecord`], read once
//! at startup and rewritten wholesale after every update so an interrupted
//! run loses at most the identifier in flight.
//!
//! # Trust rules
//!
//! | Record | Avatar on disk | Cache hit |
//! |--------|----------------|-----------|
//! | resolved | yes | yes |
//! | resolved | no | no, looked up again |
//! | unresolved | any | no, looked up again |

use crate::error::{BoardError, BoardResult};
use crate::fsutil;
use crate::profile::record::ProfileRecord;
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info, warn};

/// In-memory cache backed by a JSON snapshot file
#[derive(Debug)]
pub struct ProfileCache {
    path: PathBuf,
    records: BTreeMap<String, ProfileRecord>,
}

impl ProfileCache {
    /// Create an empty cache that persists to `path`
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            records: BTreeMap::new(),
        }
    }

    /// Load the snapshot at `path`
    ///
    /// Never fails: a missing, unreadable or corrupt file yields an empty
    /// cache and a warning.
    pub async fn load(path: impl Into<PathBuf>) -> Self {
        let mut cache = Self::empty(path);

        let content = match fs::read_to_string(&cache.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No cache at {}, starting empty", cache.path.display());
                return cache;
            }
            Err(e) => {
                warn!(
                    "Failed to read cache {}: {}, starting empty",
                    cache.path.display(),
                    e
                );
                return cache;
            }
        };

        match serde_json::from_str::<BTreeMap<String, ProfileRecord>>(&content) {
            Ok(records) => {
                info!("Loaded {} cached profiles", records.len());
                cache.records = records;
            }
            Err(e) => {
                warn!(
                    "Cache {} is corrupt ({}), starting empty",
                    cache.path.display(),
                    e
                );
            }
        }

        cache
    }

    /// Get the stored record for an identifier
    pub fn get(&self, identifier: &str) -> Option<&ProfileRecord> {
        self.records.get(identifier)
    }

    /// Whether the stored record can be served without a provider call
    pub fn is_usable(&self, identifier: &str, image_exists: bool) -> bool {
        image_exists && self.get(identifier).is_some_and(|record| record.resolved)
    }

    /// Store a record and immediately persist the whole snapshot
    ///
    /// A failed write is logged; the in-memory state stays authoritative
    /// for the rest of the run.
    pub async fn put(&mut self, record: ProfileRecord) {
        self.records.insert(record.identifier.clone(), record);

        if let Err(e) = self.persist().await {
            warn!("Failed to save cache: {}", e);
        }
    }

    /// Write the full snapshot to disk
    pub async fn persist(&self) -> BoardResult<()> {
        let content = serde_json::to_string_pretty(&self.records)?;
        fsutil::write_atomic(&self.path, content)
            .await
            .map_err(|e| BoardError::io(format!("writing cache {}", self.path.display()), e))?;

        debug!(
            "Persisted {} cached profiles to {}",
            self.records.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Drop every unresolved record, returning how many were removed
    pub fn prune_unresolved(&mut self) -> usize {
        let before = self.records.len();
        self.records.retain(|_, record| record.resolved);
        before - self.records.len()
    }

    /// Drop every record
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Iterate records in identifier order
    pub fn iter(&self) -> impl Iterator<Item = &ProfileRecord> {
        self.records.values()
    }

    /// Number of cached records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the cache holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Snapshot file path
    pub fn path(&self) -> &Path {
        &self.path
    }
}
