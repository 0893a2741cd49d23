use axum::routing::get;
use axum::Router;
use holocron_core::models::Person;

use crate::handlers::resource;
use crate::state::AppState;

/// People routes mounted at `/people`.
///
/// ```text
/// GET    /        -> list::<Person>
/// GET    /{id}    -> get_one::<Person>
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(resource::list::<Person>))
        .route("/{id}", get(resource::get_one::<Person>))
}
