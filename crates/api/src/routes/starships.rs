use axum::routing::get;
use axum::Router;
use holocron_core::models::Starship;

use crate::handlers::resource;
use crate::state::AppState;

/// Starship routes mounted at `/starships`.
///
/// ```text
/// GET    /        -> list::<Starship>
/// GET    /{id}    -> get_one::<Starship>
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(resource::list::<Starship>))
        .route("/{id}", get(resource::get_one::<Starship>))
}
