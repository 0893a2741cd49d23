use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use holocron_core::error::CoreError;
use serde::Serialize;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] and implements [`IntoResponse`] to produce the
/// `{ "type": .., "message": .. }` error body.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `holocron_core`.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// Body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let AppError::Core(core) = self;

        let (status, kind) = match &core {
            CoreError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            CoreError::NotFound { .. } => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            CoreError::Internal(detail) => {
                tracing::error!(error = %detail, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_SERVER_ERROR")
            }
        };

        let body = ErrorBody {
            kind,
            message: core.to_string(),
        };

        (status, axum::Json(body)).into_response()
    }
}
