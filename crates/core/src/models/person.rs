use serde::{Deserialize, Serialize};

use super::null_as_empty;

/// A character as returned by the upstream `people` resource.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Person {
    #[serde(deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub height: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub mass: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub hair_color: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub skin_color: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub eye_color: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub birth_year: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub gender: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub homeworld: String,
    pub films: Option<Vec<String>>,
    pub species: Option<Vec<String>>,
    pub starships: Option<Vec<String>>,
}

/// Public representation of a [`Person`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonBody {
    pub name: String,
    pub birth_year: String,
    pub eye_color: String,
    pub gender: String,
    pub hair_color: String,
    pub height: String,
    pub mass: String,
    pub skin_color: String,
    pub homeworld: String,
    pub films: Option<Vec<String>>,
    pub species: Option<Vec<String>>,
    pub starships: Option<Vec<String>>,
}

impl From<Person> for PersonBody {
    fn from(person: Person) -> Self {
        Self {
            name: person.name,
            birth_year: person.birth_year,
            eye_color: person.eye_color,
            gender: person.gender,
            hair_color: person.hair_color,
            height: person.height,
            mass: person.mass,
            skin_color: person.skin_color,
            homeworld: person.homeworld,
            films: person.films,
            species: person.species,
            starships: person.starships,
        }
    }
}
