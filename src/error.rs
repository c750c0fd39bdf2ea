//! Error types for followboard
//!
//! All modules use `BoardResult<T>` as their return type. Per-identifier
//! failures never surface here; they are folded into degraded records by
//! the pipeline. What remains are configuration, I/O and output errors.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for followboard operations
pub type BoardResult<T> = Result<T, BoardError>;

/// All errors that can occur in followboard
#[derive(Error, Debug)]
pub enum BoardError {
    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    // Input errors
    #[error("Failed to read identifier list {path}: {source}")]
    ListLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Network errors
    #[error("Image download failed: {url}: {reason}")]
    ImageFetch { url: String, reason: String },

    // Output errors
    #[error("Failed to write report {path}: {source}")]
    DocumentWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    // General errors
    #[error("Internal error: {0}")]
    Internal(String),

    #[error("{0}")]
    User(String),
}

impl BoardError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create an image fetch error
    pub fn image_fetch(url: impl Into<String>, reason: impl ToString) -> Self {
        Self::ImageFetch {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::ConfigInvalid { .. } => {
                Some("Fix the file, or regenerate it with: followboard config init --force")
            }
            Self::DocumentWrite { .. } => {
                Some("Check that the output directory exists and is writable")
            }
            _ => None,
        }
    }
}
