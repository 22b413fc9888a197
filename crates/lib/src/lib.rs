//! # maya
//!
//! This crate provides the emotional-support chat pipeline behind the Maya
//! assistant: keyword classification of incoming messages, a FAQ
//! short-circuit for the questions freshers ask most, prompt assembly for a
//! configurable AI provider, and post-processing that keeps every reply
//! supportive even when the provider fails.

pub mod classify;
pub mod compose;
pub mod errors;
pub mod faq;
pub mod prompts;
pub mod providers;
pub mod types;
pub mod wellness;

pub use errors::SupportError;
pub use types::{ChatRequest, ChatResponse, SupportClient, SupportClientBuilder};

use classify::{classify_category, classify_priority, detect_emotions};
use compose::{append_supportive_closing, clean_generated_text};
use prompts::{build_system_context, CONNECTIVITY_FALLBACK, GENERIC_FALLBACK, PROCESSING_FALLBACK};
use rand::thread_rng;
use tracing::{debug, info, warn};

impl SupportClient {
    /// Produces a reply for a chat request.
    ///
    /// The message is classified for emotional state, priority, and topic,
    /// then answered one of two ways:
    ///
    /// 1.  **FAQ short-circuit:** a match in the FAQ table answers
    ///     immediately from the fixed entry, without calling the provider.
    /// 2.  **Generation:** otherwise the persona prompt, emotional guidance,
    ///     and anonymity caveat are assembled into a system context and sent
    ///     to the AI provider along with the message.
    ///
    /// Provider failures never surface as errors here. They produce a
    /// `success: false` response carrying a user-safe fallback message for
    /// the failure class, with the raw diagnostic preserved in `error`.
    pub async fn respond(&self, request: &ChatRequest) -> Result<ChatResponse, SupportError> {
        let message = request.message.trim();
        if message.is_empty() {
            return Err(SupportError::EmptyMessage);
        }

        let emotions = detect_emotions(message);
        let priority = classify_priority(message, &emotions);
        let category = classify_category(message);
        debug!(
            "[respond] labels: priority={}, category={}, emotions={:?}",
            priority.as_str(),
            category.as_str(),
            emotions
        );

        let emotion_labels: Vec<String> =
            emotions.iter().map(|e| e.as_str().to_string()).collect();

        if let Some(entry) = faq::match_faq(message) {
            info!("[respond] FAQ hit: {}", entry.id);
            let text = faq::faq_response(entry, &emotions);
            let text = append_supportive_closing(&text, &mut thread_rng());
            return Ok(ChatResponse {
                success: true,
                message: text,
                priority: Some(priority.as_str().to_string()),
                category: Some(category.as_str().to_string()),
                emotions_detected: Some(emotion_labels),
                response_type: Some("faq".to_string()),
                faq_id: Some(entry.id.to_string()),
                ..Default::default()
            });
        }

        let system_context = build_system_context(&emotions, request.is_anonymous);
        info!("[respond] calling provider, context length: {}", system_context.len());

        let generated = self
            .ai_provider
            .generate(&system_context, message)
            .await
            .and_then(|raw| clean_generated_text(&raw));

        match generated {
            Ok(cleaned) => {
                let text = append_supportive_closing(&cleaned, &mut thread_rng());
                let response_type = if emotions.is_empty() {
                    "informational"
                } else {
                    "emotional_support"
                };
                Ok(ChatResponse {
                    success: true,
                    message: text,
                    priority: Some(priority.as_str().to_string()),
                    category: Some(category.as_str().to_string()),
                    emotions_detected: Some(emotion_labels),
                    response_type: Some(response_type.to_string()),
                    ..Default::default()
                })
            }
            Err(e) => {
                warn!("[respond] generation failed: {e}");
                Ok(fallback_response(e))
            }
        }
    }
}

/// Maps a generation failure onto the fixed user-safe fallback for its
/// class. The raw diagnostic goes into `error`; classification labels are
/// omitted on failures.
fn fallback_response(e: SupportError) -> ChatResponse {
    let message = match &e {
        SupportError::EmptyCandidates => PROCESSING_FALLBACK,
        SupportError::AiRequest(_)
        | SupportError::AiApi(_)
        | SupportError::AiDeserialization(_) => CONNECTIVITY_FALLBACK,
        _ => GENERIC_FALLBACK,
    };
    ChatResponse {
        success: false,
        message: message.to_string(),
        error: Some(e.to_string()),
        ..Default::default()
    }
}
