//! Profile record stored in the cache and rendered in the report

use serde::{Deserialize, Serialize};

/// Outcome of resolving one identifier
///
/// Field names on disk follow the cache file format
/// (`username`, `success`, `full_name`, `is_private`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    /// Identifier the record was resolved for
    #[serde(rename = "username")]
    pub identifier: String,

    /// Whether the provider lookup succeeded
    #[serde(rename = "success")]
    pub resolved: bool,

    /// Display name reported by the provider (may be empty)
    #[serde(rename = "full_name", default)]
    pub display_name: String,

    /// Whether the profile is private
    #[serde(default)]
    pub is_private: bool,
}

impl ProfileRecord {
    /// Record for a successful lookup
    pub fn resolved(
        identifier: impl Into<String>,
        display_name: impl Into<String>,
        is_private: bool,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            resolved: true,
            display_name: display_name.into(),
            is_private,
        }
    }

    /// Record for a failed lookup: every attribute takes its default
    pub fn unresolved(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            resolved: false,
            display_name: String::new(),
            is_private: false,
        }
    }
}
