//! Generic handlers shared by every upstream resource kind.
//!
//! Each handler is instantiated per kind at route registration, e.g.
//! `get(resource::get_one::<Starship>)`. The kind supplies its name, its
//! upstream calls and its field mapping through [`Resource`].

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::Json;
use holocron_core::error::CoreError;
use holocron_core::models::Collection;
use holocron_core::resource::Resource;
use holocron_core::types::parse_id;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /{resource}/{id}
///
/// Any segment that is not a positive integer, including one that fails
/// percent-decoding, is an invalid id. Upstream is called at most once and
/// only after the id is valid.
pub async fn get_one<R: Resource>(
    State(state): State<AppState>,
    raw_id: Result<Path<String>, PathRejection>,
) -> AppResult<Json<R::Body>> {
    let Ok(Path(raw_id)) = raw_id else {
        return Err(CoreError::invalid_id().into());
    };
    let id = parse_id(&raw_id)?;

    let item = R::fetch_one(state.swapi.as_ref(), id)
        .await
        .map_err(|err| R::one_error(err, id))?;

    tracing::debug!(resource = R::SINGULAR, id, "Resource fetched");

    Ok(Json(item.into_body()))
}

/// GET /{resource}
///
/// Returns the upstream envelope with every result mapped, in upstream order.
pub async fn list<R: Resource>(
    State(state): State<AppState>,
) -> AppResult<Json<Collection<R::Body>>> {
    let page = R::fetch_all(state.swapi.as_ref())
        .await
        .map_err(R::all_error)?;

    tracing::debug!(
        resource = R::PLURAL,
        count = page.count,
        returned = page.results.len(),
        "Collection fetched"
    );

    Ok(Json(page.map(R::into_body)))
}
