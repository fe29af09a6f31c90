use dioxus::prelude::*;
use tracing::info;

/// Base URL used when `SOUNDALIKE_API_URL` is unset
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Application configuration
/// In debug builds a `.env` file is honored before the environment is read.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Base URL of the similarity search API
    pub api_base_url: String,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// Read once at startup; the value is injected into the page context
    /// rather than re-read at call sites.
    pub fn load() -> Self {
        #[cfg(debug_assertions)]
        if dotenvy::dotenv().is_ok() {
            tracing::debug!("loaded environment overrides from .env");
        } else {
            tracing::debug!("no .env file found, using process environment");
        }

        let config = Self::from_env();
        info!("similarity search API at {}", config.api_base_url);
        config
    }

    fn from_env() -> Self {
        let api_base_url = std::env::var("SOUNDALIKE_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());

        Self { api_base_url }
    }
}

/// Hook returning the config provided by the app shell
pub fn use_config() -> Config {
    use_context::<Config>()
}
