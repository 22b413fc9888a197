use crate::errors::SupportError;
use crate::providers::ai::AiProvider;
use serde::{Deserialize, Serialize};

/// An inbound chat message.
///
/// `isAnonymous` is optional on the wire and defaults to `false`.
#[derive(Deserialize, Debug, Clone)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default, rename = "isAnonymous")]
    pub is_anonymous: bool,
}

/// The flat response envelope returned for every chat request.
///
/// Classification fields are omitted on failure responses, where only the
/// fallback `message` and the raw `error` diagnostic are populated.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct ChatResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emotions_detected: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faq_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// A client that turns a chat message into a supportive response.
///
/// The heavy lifting is delegated to the configured [`AiProvider`]; FAQ
/// matches are answered from the static table without a provider call.
#[derive(Clone, Debug)]
pub struct SupportClient {
    pub ai_provider: Box<dyn AiProvider>,
}

/// A builder for creating `SupportClient` instances.
#[derive(Default)]
pub struct SupportClientBuilder {
    ai_provider: Option<Box<dyn AiProvider>>,
}

impl SupportClientBuilder {
    /// Creates a new `SupportClientBuilder`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the AI provider used for non-FAQ responses.
    pub fn ai_provider(mut self, provider: Box<dyn AiProvider>) -> Self {
        self.ai_provider = Some(provider);
        self
    }

    /// Builds the `SupportClient`, failing if no provider was configured.
    pub fn build(self) -> Result<SupportClient, SupportError> {
        let ai_provider = self.ai_provider.ok_or(SupportError::MissingAiProvider)?;
        Ok(SupportClient { ai_provider })
    }
}
