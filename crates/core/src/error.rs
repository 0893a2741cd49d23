use crate::types::ResourceId;

/// Failure taxonomy shared by every request pipeline.
///
/// The `Display` output of each variant is the exact `message` served to
/// clients, so the wording here is part of the public contract.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Client input was malformed. Never reaches the upstream client.
    #[error("Bad request. Reason: {0}")]
    BadRequest(String),

    /// Upstream reported the resource (or the whole collection) as absent.
    #[error("{}", not_found_message(.resource, .id))]
    NotFound {
        resource: &'static str,
        id: Option<ResourceId>,
    },

    /// Upstream or infrastructure failure. The payload is kept for logs only.
    #[error("Internal server error.")]
    Internal(String),
}

impl CoreError {
    pub fn invalid_id() -> Self {
        CoreError::BadRequest("invalid id".to_string())
    }
}

fn not_found_message(resource: &str, id: &Option<ResourceId>) -> String {
    match id {
        Some(id) => format!("resource: {resource} with id: {id} not found"),
        None => format!("resource: {resource} not found"),
    }
}
