pub mod health;
pub mod people;
pub mod starships;

use axum::routing::get;
use axum::Router;
use holocron_core::models::{Person, Starship};

use crate::handlers::resource;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /starships                list (also with trailing slash)
/// /starships/{id}           get
///
/// /people                   list (also with trailing slash)
/// /people/{id}              get
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/starships", starships::router())
        .nest("/people", people::router())
        // Nested `/` only matches the bare prefix.
        .route("/starships/", get(resource::list::<Starship>))
        .route("/people/", get(resource::list::<Person>))
}
