//! Cache-first profile resolution

use crate::avatar::AvatarStore;
use crate::profile::cache::ProfileCache;
use crate::profile::provider::ProfileProvider;
use crate::profile::record::ProfileRecord;
use tracing::{debug, warn};

/// Result of resolving one identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub record: ProfileRecord,

    /// True when no provider call was made
    pub served_from_cache: bool,

    /// Avatar location reported by the provider (fresh lookups only)
    pub avatar_url: Option<String>,
}

/// Resolves identifiers through the cache, then the provider
pub struct ProfileResolver<'a> {
    provider: &'a dyn ProfileProvider,
    avatars: &'a AvatarStore,
    refresh: bool,
}

impl<'a> ProfileResolver<'a> {
    pub fn new(provider: &'a dyn ProfileProvider, avatars: &'a AvatarStore) -> Self {
        Self {
            provider,
            avatars,
            refresh: false,
        }
    }

    /// Ignore usable cache entries and always ask the provider
    pub fn with_refresh(mut self, refresh: bool) -> Self {
        self.refresh = refresh;
        self
    }

    /// Resolve `identifier`, writing the outcome to `cache` unless it was a hit
    pub async fn resolve(&self, cache: &mut ProfileCache, identifier: &str) -> Resolution {
        if !self.refresh && cache.is_usable(identifier, self.avatars.has_avatar(identifier)) {
            if let Some(record) = cache.get(identifier) {
                debug!("Cache hit for {}", identifier);
                return Resolution {
                    record: record.clone(),
                    served_from_cache: true,
                    avatar_url: None,
                };
            }
        }

        let (record, avatar_url) = match self.provider.lookup(identifier).await {
            Ok(profile) => (
                ProfileRecord::resolved(identifier, profile.display_name, profile.is_private),
                profile.avatar_url,
            ),
            Err(e) => {
                warn!(
                    "{} lookup for {} failed: {}",
                    self.provider.provider_name(),
                    identifier,
                    e
                );
                (ProfileRecord::unresolved(identifier), None)
            }
        };

        cache.put(record.clone()).await;

        Resolution {
            record,
            served_from_cache: false,
            avatar_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::avatar::ImageFetcher;
    use crate::error::{BoardError, BoardResult};
    use crate::profile::provider::{LookupError, ProviderProfile};
    use async_trait::async_trait;
    use std::sync::Mutex;
    use tempfile::TempDir;

    #[derive(Default)]
    struct ScriptedProvider {
        calls: Mutex<Vec<String>>,
    }

    impl ScriptedProvider {
        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ProfileProvider for ScriptedProvider {
        async fn lookup(&self, identifier: &str) -> Result<ProviderProfile, LookupError> {
            self.calls.lock().unwrap().push(identifier.to_string());
            match identifier {
                "bob" => Ok(ProviderProfile {
                    display_name: "Bob".to_string(),
                    is_private: true,
                    avatar_url: Some("https://cdn.example/bob.jpg".to_string()),
                }),
                _ => Err(LookupError::NotFound(identifier.to_string())),
            }
        }

        fn provider_name(&self) -> &'static str {
            "scripted"
        }
    }

    struct NoFetch;

    #[async_trait]
    impl ImageFetcher for NoFetch {
        async fn fetch(&self, url: &str) -> BoardResult<Vec<u8>> {
            Err(BoardError::image_fetch(url, "offline"))
        }
    }

    fn fixtures() -> (TempDir, AvatarStore, ProfileCache) {
        let dir = TempDir::new().unwrap();
        let avatars = AvatarStore::new(dir.path(), Box::new(NoFetch));
        let cache = ProfileCache::empty(dir.path().join("cache.json"));
        (dir, avatars, cache)
    }

    #[tokio::test]
    async fn success_is_stored() {
        let (_dir, avatars, mut cache) = fixtures();
        let provider = ScriptedProvider::default();
        let resolver = ProfileResolver::new(&provider, &avatars);

        let resolution = resolver.resolve(&mut cache, "bob").await;

        assert!(!resolution.served_from_cache);
        assert!(resolution.record.resolved);
        assert!(resolution.record.is_private);
        assert_eq!(resolution.avatar_url.as_deref(), Some("https://cdn.example/bob.jpg"));
        assert_eq!(cache.get("bob"), Some(&resolution.record));
    }

    #[tokio::test]
    async fn failure_is_stored_unresolved() {
        let (_dir, avatars, mut cache) = fixtures();
        let provider = ScriptedProvider::default();
        let resolver = ProfileResolver::new(&provider, &avatars);

        let resolution = resolver.resolve(&mut cache, "carol").await;

        assert!(!resolution.record.resolved);
        assert_eq!(cache.get("carol"), Some(&ProfileRecord::unresolved("carol")));
    }

    #[tokio::test]
    async fn hit_requires_avatar_on_disk() {
        let (_dir, avatars, mut cache) = fixtures();
        cache.put(ProfileRecord::resolved("bob", "Bob", true)).await;
        let provider = ScriptedProvider::default();
        let resolver = ProfileResolver::new(&provider, &avatars);

        // Metadata cached but avatar missing: provider is asked again
        let first = resolver.resolve(&mut cache, "bob").await;
        assert!(!first.served_from_cache);
        assert_eq!(provider.calls(), vec!["bob"]);

        std::fs::write(avatars.avatar_path("bob"), b"jpeg").unwrap();
        let second = resolver.resolve(&mut cache, "bob").await;
        assert!(second.served_from_cache);
        assert_eq!(provider.calls(), vec!["bob"]);
    }

    #[tokio::test]
    async fn failures_are_always_retried() {
        let (_dir, avatars, mut cache) = fixtures();
        cache.put(ProfileRecord::unresolved("carol")).await;
        std::fs::write(avatars.avatar_path("carol"), b"jpeg").unwrap();
        let provider = ScriptedProvider::default();
        let resolver = ProfileResolver::new(&provider, &avatars);

        resolver.resolve(&mut cache, "carol").await;
        resolver.resolve(&mut cache, "carol").await;

        assert_eq!(provider.calls(), vec!["carol", "carol"]);
    }

    #[tokio::test]
    async fn refresh_bypasses_hits() {
        let (_dir, avatars, mut cache) = fixtures();
        cache.put(ProfileRecord::resolved("bob", "Old name", false)).await;
        std::fs::write(avatars.avatar_path("bob"), b"jpeg").unwrap();
        let provider = ScriptedProvider::default();
        let resolver = ProfileResolver::new(&provider, &avatars).with_refresh(true);

        let resolution = resolver.resolve(&mut cache, "bob").await;

        assert!(!resolution.served_from_cache);
        assert_eq!(cache.get("bob").unwrap().display_name, "Bob");
    }
}
