use holocron_swapi::DEFAULT_BASE_URL;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// Root of the upstream API (default: `https://swapi.dev/api`).
    pub swapi_base_url: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var          | Default                    |
    /// |------------------|----------------------------|
    /// | `HOST`           | `0.0.0.0`                  |
    /// | `PORT`           | `3000`                     |
    /// | `CORS_ORIGINS`   | `http://localhost:5173`    |
    /// | `SWAPI_BASE_URL` | `https://swapi.dev/api`    |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5173".into()),
        );

        let swapi_base_url =
            std::env::var("SWAPI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());

        Self {
            host,
            port,
            cors_origins,
            swapi_base_url,
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
