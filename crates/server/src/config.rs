//! # Server Configuration
//!
//! Environment-based configuration, loaded once at startup. Missing or
//! malformed values abort startup rather than surfacing mid-request later.

use std::env;
use thiserror::Error;

/// Errors that can occur while loading the configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(String),
    #[error("Invalid value for environment variable {0}: '{1}'")]
    Invalid(String, String),
}

/// The application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Which AI provider backs the chat endpoint ("gemini" or "local").
    pub ai_provider: String,
    /// The generation API endpoint.
    pub ai_api_url: String,
    /// Credential for the generation API. Required for gemini.
    pub ai_api_key: Option<String>,
    /// Model name passed to OpenAI-compatible endpoints.
    pub ai_model: Option<String>,
    /// The port the server listens on.
    pub port: u16,
}

/// Loads the configuration from environment variables.
pub fn get_config() -> Result<Config, ConfigError> {
    let ai_provider = env::var("AI_PROVIDER").unwrap_or_else(|_| "gemini".to_string());
    let ai_api_url =
        env::var("AI_API_URL").map_err(|_| ConfigError::Missing("AI_API_URL".to_string()))?;
    let ai_api_key = env::var("AI_API_KEY").ok();
    let ai_model = env::var("AI_MODEL").ok();

    let port = match env::var("PORT") {
        Ok(val) => val
            .parse::<u16>()
            .map_err(|_| ConfigError::Invalid("PORT".to_string(), val))?,
        Err(_) => 9090,
    };

    Ok(Config {
        ai_provider,
        ai_api_url,
        ai_api_key,
        ai_model,
        port,
    })
}
