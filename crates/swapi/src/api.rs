//! REST client for the public Star Wars API.
//!
//! Wraps the `starships` and `people` resources using [`reqwest`] and
//! implements [`SwapiClient`] so it can be handed to the HTTP layer.

use async_trait::async_trait;
use holocron_core::models::{Collection, Person, Starship};
use holocron_core::types::ResourceId;
use holocron_core::upstream::{SwapiClient, UpstreamError, UpstreamResult};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

/// Default upstream base URL (no trailing slash).
pub const DEFAULT_BASE_URL: &str = "https://swapi.dev/api";

/// HTTP client for a SWAPI-compatible server.
pub struct SwapiApi {
    client: reqwest::Client,
    base_url: String,
}

/// Errors from the SWAPI REST layer.
#[derive(Debug, thiserror::Error)]
pub enum SwapiApiError {
    /// The HTTP request itself failed (network, DNS, TLS, body decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// SWAPI returned a non-2xx status code.
    #[error("SWAPI error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl From<SwapiApiError> for UpstreamError {
    fn from(err: SwapiApiError) -> Self {
        match err {
            SwapiApiError::ApiError { status, .. } if status == StatusCode::NOT_FOUND.as_u16() => {
                UpstreamError::NotFound
            }
            other => UpstreamError::Internal(other.to_string()),
        }
    }
}

impl SwapiApi {
    /// Create a new client.
    ///
    /// * `base_url` - API root, e.g. `https://swapi.dev/api`. A trailing
    ///   slash is tolerated.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET {base}/{resource}/{id}/`
    async fn fetch_one<T: DeserializeOwned>(
        &self,
        resource: &str,
        id: ResourceId,
    ) -> Result<T, SwapiApiError> {
        self.get_json(&format!("{}/{resource}/{id}/", self.base_url)).await
    }

    /// `GET {base}/{resource}/`. Only the first page is requested.
    async fn fetch_all<T: DeserializeOwned>(
        &self,
        resource: &str,
    ) -> Result<Collection<T>, SwapiApiError> {
        self.get_json(&format!("{}/{resource}/", self.base_url)).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, SwapiApiError> {
        tracing::debug!(%url, "Requesting SWAPI resource");

        let response = self.client.get(url).send().await?;
        let response = Self::ensure_success(response).await?;

        Ok(response.json::<T>().await?)
    }

    // ---- private helpers ----

    /// Returns the response unchanged on success, or a
    /// [`SwapiApiError::ApiError`] with the status and body text on failure.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, SwapiApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(SwapiApiError::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

fn report<T>(result: Result<T, SwapiApiError>, what: &str) -> UpstreamResult<T> {
    result.map_err(|err| {
        let upstream = UpstreamError::from(err);
        match &upstream {
            UpstreamError::NotFound => tracing::debug!(what, "SWAPI resource not found"),
            UpstreamError::Internal(detail) => {
                tracing::warn!(what, error = %detail, "SWAPI request failed")
            }
        }
        upstream
    })
}

#[async_trait]
impl SwapiClient for SwapiApi {
    async fn get_starship(&self, id: ResourceId) -> UpstreamResult<Starship> {
        report(self.fetch_one("starships", id).await, "starship")
    }

    async fn get_starships(&self) -> UpstreamResult<Collection<Starship>> {
        report(self.fetch_all("starships").await, "starships")
    }

    async fn get_person(&self, id: ResourceId) -> UpstreamResult<Person> {
        report(self.fetch_one("people", id).await, "people")
    }

    async fn get_people(&self) -> UpstreamResult<Collection<Person>> {
        report(self.fetch_all("people").await, "peoples")
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let api = SwapiApi::new("http://localhost:9000/api/");
        assert_eq!(api.base_url(), "http://localhost:9000/api");
    }

    #[test]
    fn status_404_maps_to_not_found() {
        let err = SwapiApiError::ApiError {
            status: 404,
            body: r#"{"detail":"Not found"}"#.into(),
        };
        assert_eq!(UpstreamError::from(err), UpstreamError::NotFound);
    }

    #[test]
    fn other_statuses_map_to_internal() {
        for status in [400, 401, 429, 500, 502, 503] {
            let err = SwapiApiError::ApiError {
                status,
                body: String::new(),
            };
            assert_matches!(UpstreamError::from(err), UpstreamError::Internal(_));
        }
    }

    #[test]
    fn report_passes_values_through_and_converts_errors() {
        assert_eq!(report(Ok(7), "starship"), Ok(7));

        let not_found: Result<(), _> = Err(SwapiApiError::ApiError {
            status: 404,
            body: String::new(),
        });
        assert_eq!(report(not_found, "starship"), Err(UpstreamError::NotFound));

        let failed: Result<(), _> = Err(SwapiApiError::ApiError {
            status: 502,
            body: "bad gateway".into(),
        });
        assert_matches!(
            report(failed, "starships"),
            Err(UpstreamError::Internal(detail)) if detail.contains("502")
        );
    }
}
