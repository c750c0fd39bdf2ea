//! Configuration schema for followboard
//!
//! Configuration is read from `followboard.toml` in the working directory.
//! Every section falls back to defaults, so an empty file is valid.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Identifier list locations
    pub lists: ListsConfig,

    /// Generated artifacts
    pub output: OutputConfig,

    /// Network pacing and timeouts
    pub fetch: FetchConfig,

    /// Profile lookup provider
    pub provider: ProviderConfig,

    /// Report presentation
    pub report: ReportConfig,
}

/// Identifier list files, one per category
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ListsConfig {
    pub sponsors: PathBuf,
    pub developers: PathBuf,
    pub participants: PathBuf,
}

impl Default for ListsConfig {
    fn default() -> Self {
        Self {
            sponsors: PathBuf::from("sponsors.txt"),
            developers: PathBuf::from("developers.txt"),
            participants: PathBuf::from("users.txt"),
        }
    }
}

/// Output locations
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Rendered HTML document
    pub document: PathBuf,

    /// Directory holding avatars and the placeholder image
    pub assets_dir: PathBuf,

    /// Profile cache snapshot
    pub cache_file: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            document: PathBuf::from("index.html"),
            assets_dir: PathBuf::from("assets"),
            cache_file: PathBuf::from("cache.json"),
        }
    }
}

/// Pacing and timeout settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Delay between provider-backed lookups in seconds
    pub delay_secs: u64,

    /// Timeout for a single avatar download in seconds
    pub image_timeout_secs: u64,

    /// Timeout for a single profile lookup in seconds
    pub lookup_timeout_secs: u64,

    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            delay_secs: 5,
            image_timeout_secs: 10,
            lookup_timeout_secs: 30,
            user_agent: concat!("followboard/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Profile lookup provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Web profile endpoint, queried with `?username=<id>`
    pub endpoint: String,

    /// Value of the `x-ig-app-id` header expected by the endpoint
    pub app_id: String,

    /// Base URL for profile deep links in the report
    pub profile_url_base: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://i.instagram.com/api/v1/users/web_profile_info/".to_string(),
            app_id: "936619743392459".to_string(),
            profile_url_base: "https://www.instagram.com/".to_string(),
        }
    }
}

/// Report presentation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Page title and heading
    pub title: String,

    /// Value of the `lang` attribute on `<html>`
    pub lang: String,

    /// Footer text
    pub footer: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: "Follow list".to_string(),
            lang: "en".to_string(),
            footer: "Generated by followboard".to_string(),
        }
    }
}
