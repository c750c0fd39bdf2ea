//! Profile records, their durable cache, and resolution through a provider

pub mod cache;
pub mod provider;
pub mod record;
pub mod resolver;

pub use cache::ProfileCache;
pub use provider::{LookupError, ProfileProvider, ProviderProfile, WebProfileProvider};
pub use record::ProfileRecord;
pub use resolver::{ProfileResolver, Resolution};
