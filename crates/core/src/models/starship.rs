use serde::{Deserialize, Serialize};

use super::null_as_empty;

/// A starship as returned by the upstream API.
///
/// Every numeric-looking property is a string upstream (`"n/a"` and
/// `"unknown"` are common values), so no conversion is attempted.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Starship {
    #[serde(deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub model: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub manufacturer: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub cost_in_credits: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub length: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub max_atmosphering_speed: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub crew: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub passengers: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub cargo_capacity: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub consumables: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub hyperdrive_rating: String,
    #[serde(rename = "MGLT", deserialize_with = "null_as_empty")]
    pub mglt: String,
    #[serde(rename = "starship_class", deserialize_with = "null_as_empty")]
    pub class: String,
    pub pilots: Option<Vec<String>>,
    pub films: Option<Vec<String>>,
}

/// Public representation of a [`Starship`].
///
/// Field order is the serialization order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StarshipBody {
    pub name: String,
    pub model: String,
    pub starship_class: String,
    pub manufacturer: String,
    pub cost_in_credits: String,
    pub length: String,
    pub crew: String,
    pub passengers: String,
    pub max_atmosphering_speed: String,
    pub hyperdrive_rating: String,
    #[serde(rename = "MGLT")]
    pub mglt: String,
    pub cargo_capacity: String,
    pub consumables: String,
    pub films: Option<Vec<String>>,
    pub pilots: Option<Vec<String>>,
}

impl From<Starship> for StarshipBody {
    fn from(ship: Starship) -> Self {
        Self {
            name: ship.name,
            model: ship.model,
            starship_class: ship.class,
            manufacturer: ship.manufacturer,
            cost_in_credits: ship.cost_in_credits,
            length: ship.length,
            crew: ship.crew,
            passengers: ship.passengers,
            max_atmosphering_speed: ship.max_atmosphering_speed,
            hyperdrive_rating: ship.hyperdrive_rating,
            mglt: ship.mglt,
            cargo_capacity: ship.cargo_capacity,
            consumables: ship.consumables,
            films: ship.films,
            pilots: ship.pilots,
        }
    }
}
