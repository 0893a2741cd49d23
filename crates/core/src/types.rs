use crate::error::CoreError;

/// Upstream resource identifiers are positive integers.
pub type ResourceId = u64;

/// Parse a raw path segment into a [`ResourceId`].
///
/// Anything that is not a positive base-10 integer (empty, signed negative,
/// zero, overflowing, trailing garbage) is rejected with
/// [`CoreError::BadRequest`].
pub fn parse_id(raw: &str) -> Result<ResourceId, CoreError> {
    match raw.parse::<ResourceId>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(CoreError::invalid_id()),
    }
}
