//! Identifier list loading
//!
//! Lists are plain UTF-8 text, one identifier per line. Blank lines and
//! `#` comments are skipped, leading `@` mention markers are stripped.
//! Duplicates are kept: each line is one card in the report.
//!
//! Identifiers may only use `[A-Za-z0-9._-]` and must not be all dots.
//! Anything else is dropped with a warning, so every accepted identifier
//! maps to its own avatar file.

use crate::error::{BoardError, BoardResult};
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;
use tracing::{debug, warn};

const COMMENT_MARKER: char = '#';
const MENTION_MARKER: char = '@';

/// Whether `id` is usable as a profile identifier and avatar file stem
pub fn is_valid_identifier(id: &str) -> bool {
    !id.is_empty()
        && !id.chars().all(|c| c == '.')
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
}

/// Parse list text into normalized identifiers, preserving order
pub fn parse_identifiers(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(COMMENT_MARKER))
        .map(|line| line.trim_start_matches(MENTION_MARKER).trim())
        .filter(|id| !id.is_empty())
        .filter(|id| {
            let valid = is_valid_identifier(id);
            if !valid {
                warn!("Skipping invalid identifier {:?}", id);
            }
            valid
        })
        .map(str::to_string)
        .collect()
}

/// Load identifiers from a list file
///
/// A missing file is not an error: it yields an empty list and a warning.
/// Any other read failure is returned so the caller can decide.
pub async fn load_identifiers(path: &Path) -> BoardResult<Vec<String>> {
    let content = match fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!("{} not found, treating it as an empty list", path.display());
            return Ok(vec![]);
        }
        Err(e) => {
            return Err(BoardError::ListLoad {
                path: path.to_path_buf(),
                source: e,
            })
        }
    };

    let ids = parse_identifiers(&content);
    debug!("Loaded {} identifiers from {}", ids.len(), path.display());
    Ok(ids)
}
