//! # Application State
//!
//! This module defines the shared application state (`AppState`) and the
//! logic for building it at startup. The `AppState` holds the configured
//! support client, making it accessible to all request handlers.

use crate::config::Config;
use maya::{
    providers::ai::{gemini::GeminiProvider, local::LocalAiProvider, AiProvider},
    SupportClient, SupportClientBuilder,
};
use std::sync::Arc;

/// The shared application state, accessible from all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The support client that answers chat messages.
    pub client: Arc<SupportClient>,
}

/// Builds the shared application state from the configuration.
///
/// Instantiates the AI provider selected by the configuration and wires it
/// into a `SupportClient`.
pub fn build_app_state(config: Config) -> anyhow::Result<AppState> {
    let ai_provider: Box<dyn AiProvider> = match config.ai_provider.as_str() {
        "gemini" => {
            let api_key = config.ai_api_key.clone().ok_or_else(|| {
                anyhow::anyhow!("AI_API_KEY is required for the gemini provider")
            })?;
            Box::new(GeminiProvider::new(config.ai_api_url.clone(), api_key)?)
        }
        "local" => Box::new(LocalAiProvider::new(
            config.ai_api_url.clone(),
            config.ai_api_key.clone(),
            config.ai_model.clone(),
        )?),
        other => {
            return Err(anyhow::anyhow!("Unsupported AI provider type '{other}'"));
        }
    };

    let client = SupportClientBuilder::new()
        .ai_provider(ai_provider)
        .build()?;

    Ok(AppState {
        client: Arc::new(client),
    })
}
