#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use holocron_api::config::ServerConfig;
use holocron_api::router::build_app_router;
use holocron_api::state::AppState;
use holocron_core::models::{Collection, Person, Starship};
use holocron_core::types::ResourceId;
use holocron_core::upstream::{SwapiClient, UpstreamError, UpstreamResult};

/// One recorded upstream invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Starship(ResourceId),
    Starships,
    Person(ResourceId),
    People,
}

/// In-memory [`SwapiClient`] returning canned results and recording calls.
///
/// A method without a canned result answers `Internal` so a missing setup
/// shows up as a 500 rather than a hang.
#[derive(Default)]
pub struct MockSwapi {
    pub starship: Option<UpstreamResult<Starship>>,
    pub starships: Option<UpstreamResult<Collection<Starship>>>,
    pub person: Option<UpstreamResult<Person>>,
    pub people: Option<UpstreamResult<Collection<Person>>>,
    pub calls: Mutex<Vec<Call>>,
}

impl MockSwapi {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn answer<T: Clone>(
        &self,
        call: Call,
        canned: &Option<UpstreamResult<T>>,
    ) -> UpstreamResult<T> {
        self.calls.lock().unwrap().push(call);
        canned
            .clone()
            .unwrap_or_else(|| Err(UpstreamError::Internal("no canned response".into())))
    }
}

#[async_trait]
impl SwapiClient for MockSwapi {
    async fn get_starship(&self, id: ResourceId) -> UpstreamResult<Starship> {
        self.answer(Call::Starship(id), &self.starship)
    }

    async fn get_starships(&self) -> UpstreamResult<Collection<Starship>> {
        self.answer(Call::Starships, &self.starships)
    }

    async fn get_person(&self, id: ResourceId) -> UpstreamResult<Person> {
        self.answer(Call::Person(id), &self.person)
    }

    async fn get_people(&self) -> UpstreamResult<Collection<Person>> {
        self.answer(Call::People, &self.people)
    }
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        swapi_base_url: "http://upstream.invalid/api".to_string(),
    }
}

/// Build the full application router around the given mock.
///
/// Uses the same builder as `main.rs` so the middleware stack is exercised.
pub fn build_test_app(swapi: Arc<MockSwapi>) -> Router {
    let config = test_config();
    let state = AppState {
        swapi,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_str(&body_string(response).await).unwrap()
}

pub fn death_star() -> Starship {
    Starship {
        name: "Death Star".into(),
        model: "DS-1 Orbital Battle Station".into(),
        manufacturer: "Imperial Department of Military Research, Sienar Fleet Systems".into(),
        cost_in_credits: "1000000000000".into(),
        length: "120000".into(),
        max_atmosphering_speed: "n/a".into(),
        crew: "342953".into(),
        passengers: "843342".into(),
        cargo_capacity: "1000000000000".into(),
        consumables: "3 years".into(),
        hyperdrive_rating: "4.0".into(),
        mglt: "10".into(),
        class: "Deep Space Mobile Battlestation".into(),
        pilots: None,
        films: Some(vec!["https://swapi.dev/api/films/1/".into()]),
    }
}

/// Serialized form of [`death_star`].
pub const DEATH_STAR_JSON: &str = r#"{"name":"Death Star","model":"DS-1 Orbital Battle Station","starship_class":"Deep Space Mobile Battlestation","manufacturer":"Imperial Department of Military Research, Sienar Fleet Systems","cost_in_credits":"1000000000000","length":"120000","crew":"342953","passengers":"843342","max_atmosphering_speed":"n/a","hyperdrive_rating":"4.0","MGLT":"10","cargo_capacity":"1000000000000","consumables":"3 years","films":["https://swapi.dev/api/films/1/"],"pilots":null}"#;

pub fn luiza() -> Person {
    let link = || Some(vec!["https://swapi.dev/api/films/1/".to_string()]);
    Person {
        name: "Luiza".into(),
        height: "1,67".into(),
        mass: "57Kg".into(),
        hair_color: "Castanho escuro".into(),
        skin_color: "Marrom".into(),
        eye_color: "Marrom".into(),
        birth_year: "01/03/1962".into(),
        gender: "Feminino".into(),
        homeworld: "1000000000000".into(),
        films: link(),
        species: link(),
        starships: link(),
    }
}

/// Serialized form of [`luiza`].
pub const LUIZA_JSON: &str = r#"{"name":"Luiza","birth_year":"01/03/1962","eye_color":"Marrom","gender":"Feminino","hair_color":"Castanho escuro","height":"1,67","mass":"57Kg","skin_color":"Marrom","homeworld":"1000000000000","films":["https://swapi.dev/api/films/1/"],"species":["https://swapi.dev/api/films/1/"],"starships":["https://swapi.dev/api/films/1/"]}"#;
