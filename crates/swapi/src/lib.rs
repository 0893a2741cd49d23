//! Upstream client for the public Star Wars API (SWAPI).

pub mod api;

pub use api::{SwapiApi, SwapiApiError, DEFAULT_BASE_URL};
