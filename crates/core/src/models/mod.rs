pub mod collection;
pub mod person;
pub mod starship;

pub use collection::Collection;
pub use person::{Person, PersonBody};
pub use starship::{Starship, StarshipBody};

use serde::{Deserialize, Deserializer};

/// Reads an upstream string property, treating an explicit `null` as `""`.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
