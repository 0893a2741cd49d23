//! Per-kind wiring for the generic request pipeline.
//!
//! A [`Resource`] names a kind, knows which [`SwapiClient`] calls fetch it,
//! and how to map the upstream model into its public body. The HTTP layer is
//! written once against this trait.

use async_trait::async_trait;
use serde::Serialize;

use crate::error::CoreError;
use crate::models::{Collection, Person, PersonBody, Starship, StarshipBody};
use crate::types::ResourceId;
use crate::upstream::{SwapiClient, UpstreamError, UpstreamResult};

#[async_trait]
pub trait Resource: Sized + Send + 'static {
    /// Name used in single-resource error messages.
    const SINGULAR: &'static str;
    /// Name used in collection error messages.
    const PLURAL: &'static str;

    /// Public JSON shape served to clients.
    type Body: Serialize + Send + 'static;

    async fn fetch_one(client: &dyn SwapiClient, id: ResourceId) -> UpstreamResult<Self>;

    async fn fetch_all(client: &dyn SwapiClient) -> UpstreamResult<Collection<Self>>;

    fn into_body(self) -> Self::Body;

    /// Translate an upstream failure for a single-resource request.
    fn one_error(err: UpstreamError, id: ResourceId) -> CoreError {
        translate(err, Self::SINGULAR, Some(id))
    }

    /// Translate an upstream failure for a collection request.
    fn all_error(err: UpstreamError) -> CoreError {
        translate(err, Self::PLURAL, None)
    }
}

fn translate(err: UpstreamError, resource: &'static str, id: Option<ResourceId>) -> CoreError {
    match err {
        UpstreamError::NotFound => CoreError::NotFound { resource, id },
        UpstreamError::Internal(detail) => CoreError::Internal(detail),
    }
}

#[async_trait]
impl Resource for Starship {
    const SINGULAR: &'static str = "starship";
    const PLURAL: &'static str = "starships";

    type Body = StarshipBody;

    async fn fetch_one(client: &dyn SwapiClient, id: ResourceId) -> UpstreamResult<Self> {
        client.get_starship(id).await
    }

    async fn fetch_all(client: &dyn SwapiClient) -> UpstreamResult<Collection<Self>> {
        client.get_starships().await
    }

    fn into_body(self) -> StarshipBody {
        self.into()
    }
}

#[async_trait]
impl Resource for Person {
    const SINGULAR: &'static str = "people";
    // Not "people": existing clients match on this exact message.
    const PLURAL: &'static str = "peoples";

    type Body = PersonBody;

    async fn fetch_one(client: &dyn SwapiClient, id: ResourceId) -> UpstreamResult<Self> {
        client.get_person(id).await
    }

    async fn fetch_all(client: &dyn SwapiClient) -> UpstreamResult<Collection<Self>> {
        client.get_people().await
    }

    fn into_body(self) -> PersonBody {
        self.into()
    }
}
