//! Domain types for the Holocron façade.
//!
//! Identifiers, the error taxonomy, upstream and public models, and the
//! traits that let the HTTP layer stay generic over resource kinds.

pub mod error;
pub mod models;
pub mod resource;
pub mod types;
pub mod upstream;
