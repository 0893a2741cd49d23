use std::sync::Arc;

use holocron_core::upstream::SwapiClient;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; nothing in here is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    /// Upstream data source. Swapped for an in-memory client in tests.
    pub swapi: Arc<dyn SwapiClient>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
