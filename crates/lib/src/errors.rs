use thiserror::Error;

/// Custom error types for the support pipeline.
#[derive(Error, Debug)]
pub enum SupportError {
    #[error("Failed to build Reqwest client: {0}")]
    ReqwestClientBuild(reqwest::Error),
    #[error("Failed to send request to the generation API: {0}")]
    AiRequest(reqwest::Error),
    #[error("Failed to deserialize the generation API response: {0}")]
    AiDeserialization(reqwest::Error),
    #[error("The generation API returned an error: {0}")]
    AiApi(String),
    #[error("No candidates in response")]
    EmptyCandidates,
    #[error("Message is empty")]
    EmptyMessage,
    #[error("AI provider is missing")]
    MissingAiProvider,
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}
