//! Profile lookup provider abstraction
//!
//! The provider is an external service: given an identifier it returns the
//! public profile attributes or an error. The pipeline only ever sees the
//! [`ProfileProvider`] trait; [`WebProfileProvider`] is the HTTP backend
//! used by the binary.

use crate::config::schema::{FetchConfig, ProviderConfig};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Attributes returned by a successful lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderProfile {
    pub display_name: String,
    pub is_private: bool,
    pub avatar_url: Option<String>,
}

/// Why a lookup failed
///
/// The distinction is only used for logging; every variant produces the
/// same unresolved record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("profile not found: {0}")]
    NotFound(String),

    #[error("rate limited by provider")]
    RateLimited,

    #[error("provider returned HTTP {0}")]
    Status(u16),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Abstract profile lookup interface
#[async_trait]
pub trait ProfileProvider: Send + Sync {
    /// Look up a single identifier
    async fn lookup(&self, identifier: &str) -> Result<ProviderProfile, LookupError>;

    /// Human-readable provider name for display
    fn provider_name(&self) -> &'static str;
}

/// Unauthenticated lookups against the public web-profile JSON endpoint
pub struct WebProfileProvider {
    agent: ureq::Agent,
    endpoint: String,
    app_id: String,
    user_agent: String,
}

impl WebProfileProvider {
    pub fn new(provider: &ProviderConfig, fetch: &FetchConfig) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(fetch.lookup_timeout_secs)))
            .build()
            .into();

        Self {
            agent,
            endpoint: provider.endpoint.clone(),
            app_id: provider.app_id.clone(),
            user_agent: fetch.user_agent.clone(),
        }
    }
}

#[async_trait]
impl ProfileProvider for WebProfileProvider {
    async fn lookup(&self, identifier: &str) -> Result<ProviderProfile, LookupError> {
        let endpoint = self.endpoint.clone();
        let agent = self.agent.clone();
        let app_id = self.app_id.clone();
        let user_agent = self.user_agent.clone();
        let id = identifier.to_string();

        debug!("Looking up {} via {}", identifier, endpoint);

        // ureq is blocking; run it off the runtime but await it inline
        tokio::task::spawn_blocking(move || {
            let mut response = agent
                .get(endpoint.as_str())
                .query("username", id.as_str())
                .header("User-Agent", user_agent.as_str())
                .header("x-ig-app-id", app_id.as_str())
                .call()
                .map_err(|e| classify_transport_error(&id, e))?;

            let body = response
                .body_mut()
                .read_to_string()
                .map_err(|e| LookupError::Transport(e.to_string()))?;

            parse_profile(&id, &body)
        })
        .await
        .map_err(|e| LookupError::Transport(format!("lookup task failed: {}", e)))?
    }

    fn provider_name(&self) -> &'static str {
        "web-profile"
    }
}

fn classify_transport_error(identifier: &str, err: ureq::Error) -> LookupError {
    match err {
        ureq::Error::StatusCode(404) => LookupError::NotFound(identifier.to_string()),
        ureq::Error::StatusCode(429) => LookupError::RateLimited,
        ureq::Error::StatusCode(code) => LookupError::Status(code),
        other => LookupError::Transport(other.to_string()),
    }
}

#[derive(Deserialize)]
struct WebProfileResponse {
    data: Option<WebProfileData>,
}

#[derive(Deserialize)]
struct WebProfileData {
    user: Option<WebProfileUser>,
}

#[derive(Deserialize)]
struct WebProfileUser {
    #[serde(default)]
    full_name: Option<String>,
    #[serde(default)]
    is_private: bool,
    #[serde(default)]
    profile_pic_url_hd: Option<String>,
    #[serde(default)]
    profile_pic_url: Option<String>,
}

/// Parse a web-profile response body
pub(crate) fn parse_profile(identifier: &str, body: &str) -> Result<ProviderProfile, LookupError> {
    let response: WebProfileResponse =
        serde_json::from_str(body).map_err(|e| LookupError::Malformed(e.to_string()))?;

    let user = response
        .data
        .and_then(|data| data.user)
        .ok_or_else(|| LookupError::NotFound(identifier.to_string()))?;

    Ok(ProviderProfile {
        display_name: user.full_name.unwrap_or_default(),
        is_private: user.is_private,
        avatar_url: user
            .profile_pic_url_hd
            .or(user.profile_pic_url)
            .filter(|url| !url.is_empty()),
    })
}
