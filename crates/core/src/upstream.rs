//! Capability interface for the upstream data source.
//!
//! Handlers receive an implementation through application state, so tests
//! swap in an in-memory client without touching process-wide state.

use async_trait::async_trait;

use crate::models::{Collection, Person, Starship};
use crate::types::ResourceId;

/// Failure kinds an upstream client may report.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpstreamError {
    /// The requested resource or collection does not exist upstream.
    #[error("resource not found upstream")]
    NotFound,

    /// Transport, status or decoding failure. Carries a diagnostic detail.
    #[error("upstream failure: {0}")]
    Internal(String),
}

pub type UpstreamResult<T> = Result<T, UpstreamError>;

/// Fetch-by-id and fetch-all operations against the upstream API.
#[async_trait]
pub trait SwapiClient: Send + Sync {
    async fn get_starship(&self, id: ResourceId) -> UpstreamResult<Starship>;

    async fn get_starships(&self) -> UpstreamResult<Collection<Starship>>;

    async fn get_person(&self, id: ResourceId) -> UpstreamResult<Person>;

    async fn get_people(&self) -> UpstreamResult<Collection<Person>>;
}
