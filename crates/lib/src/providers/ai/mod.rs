pub mod gemini;
pub mod local;

use crate::errors::SupportError;
use async_trait::async_trait;
use dyn_clone::DynClone;
use std::fmt::Debug;

/// A trait for interacting with an AI provider.
///
/// This trait defines a common interface for producing a supportive reply
/// from a system context and a user message using different text-generation
/// backends (e.g., Gemini, self-hosted OpenAI-compatible models).
#[async_trait]
pub trait AiProvider: Send + Sync + Debug + DynClone {
    /// Generates a response from a given system and user prompt.
    ///
    /// The result should be a string containing the AI's response.
    async fn generate(&self, system_prompt: &str, user_prompt: &str)
        -> Result<String, SupportError>;
}

dyn_clone::clone_trait_object!(AiProvider);
