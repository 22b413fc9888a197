//! # Client Tests
//!
//! This file contains tests for the core flow of the `maya` library: FAQ
//! short-circuiting, prompt assembly for the AI provider, and the fallback
//! behavior when the provider fails.

mod common;

use crate::common::{setup_tracing, FailingAiProvider, MockAiProvider, MockFailure};
use maya::prompts::{
    ANONYMOUS_MODE_CONTEXT, CONNECTIVITY_FALLBACK, EMOTIONAL_STATE_PREFIX, MAYA_SYSTEM_PROMPT,
    PROCESSING_FALLBACK, SUPPORTIVE_CLOSINGS,
};
use maya::{ChatRequest, SupportClientBuilder, SupportError};

/// Tests that a message matching a FAQ entry is answered entirely from the
/// static table: correct labels, correct faq id, and zero provider calls.
#[tokio::test]
async fn test_faq_match_short_circuits_the_provider() -> anyhow::Result<()> {
    setup_tracing();

    // 1. Setup a mock provider that would notice any call.
    let mock_ai_provider = MockAiProvider::new(vec![]);
    let call_history = mock_ai_provider.call_history.clone();

    let client = SupportClientBuilder::new()
        .ai_provider(Box::new(mock_ai_provider))
        .build()?;

    // 2. Ask one of the canned questions.
    let request = ChatRequest {
        message: "What is the passing marks required in ILP?".to_string(),
        is_anonymous: false,
    };
    let response = client.respond(&request).await?;

    // 3. The response comes from the FAQ table with full labels.
    assert!(response.success);
    assert_eq!(response.faq_id.as_deref(), Some("passing_marks"));
    assert_eq!(response.response_type.as_deref(), Some("faq"));
    assert_eq!(response.category.as_deref(), Some("program"));
    assert_eq!(response.priority.as_deref(), Some("medium"));
    assert_eq!(response.emotions_detected, Some(vec![]));

    // 4. A supportive closing is appended to the canned answer.
    assert!(
        SUPPORTIVE_CLOSINGS
            .iter()
            .any(|closing| response.message.ends_with(closing)),
        "FAQ answer should end with one of the supportive closings: {}",
        response.message
    );

    // 5. The provider was never consulted.
    assert!(
        call_history.read().unwrap().is_empty(),
        "FAQ responses must not call the AI provider"
    );

    Ok(())
}

/// Tests that a non-FAQ message reaches the provider with the assembled
/// system context: persona first, emotional guidance, anonymity caveat last,
/// and the untouched user message as the user prompt.
#[tokio::test]
async fn test_generated_path_assembles_prompts() -> anyhow::Result<()> {
    setup_tracing();

    let mock_ai_provider =
        MockAiProvider::new(vec!["That first week jitters feeling is normal.".to_string()]);
    let call_history = mock_ai_provider.call_history.clone();

    let client = SupportClientBuilder::new()
        .ai_provider(Box::new(mock_ai_provider))
        .build()?;

    let request = ChatRequest {
        message: "I'm anxious about meeting my new team".to_string(),
        is_anonymous: true,
    };
    let response = client.respond(&request).await?;

    assert!(response.success);
    assert_eq!(response.response_type.as_deref(), Some("emotional_support"));
    assert_eq!(
        response.emotions_detected,
        Some(vec!["anxiety".to_string()])
    );

    let history = call_history.read().unwrap();
    assert_eq!(history.len(), 1, "Expected exactly one provider call");

    let (system_prompt, user_prompt) = &history[0];
    assert!(system_prompt.starts_with(MAYA_SYSTEM_PROMPT));
    assert!(system_prompt.contains(EMOTIONAL_STATE_PREFIX));
    assert!(system_prompt.ends_with(ANONYMOUS_MODE_CONTEXT));
    assert_eq!(user_prompt, &request.message);

    Ok(())
}

/// Tests that an echoed instruction preamble is stripped from the generated
/// text before it reaches the caller.
#[tokio::test]
async fn test_echoed_preamble_is_stripped() -> anyhow::Result<()> {
    setup_tracing();

    let echoed = "SYSTEM CONTEXT: persona and guidance echoed back\n\nHere is the real advice.";
    let mock_ai_provider = MockAiProvider::new(vec![echoed.to_string()]);

    let client = SupportClientBuilder::new()
        .ai_provider(Box::new(mock_ai_provider))
        .build()?;

    let request = ChatRequest {
        message: "Tell me about the cafeteria timings".to_string(),
        is_anonymous: false,
    };
    let response = client.respond(&request).await?;

    assert!(response.success);
    assert!(
        response.message.starts_with("Here is the real advice."),
        "Preamble should be stripped, got: {}",
        response.message
    );
    assert!(!response.message.contains("SYSTEM CONTEXT:"));

    Ok(())
}

/// Tests the fallback for an upstream reply with no usable candidates:
/// success is false, the fixed processing fallback is returned, and the raw
/// diagnostic is preserved while labels are omitted.
#[tokio::test]
async fn test_fallback_for_empty_candidates() -> anyhow::Result<()> {
    setup_tracing();

    let client = SupportClientBuilder::new()
        .ai_provider(Box::new(FailingAiProvider {
            failure: MockFailure::EmptyCandidates,
        }))
        .build()?;

    let request = ChatRequest {
        message: "Where do I find the shuttle routes?".to_string(),
        is_anonymous: false,
    };
    let response = client.respond(&request).await?;

    assert!(!response.success);
    assert_eq!(response.message, PROCESSING_FALLBACK);
    assert_eq!(response.error.as_deref(), Some("No candidates in response"));
    assert!(response.priority.is_none());
    assert!(response.category.is_none());

    Ok(())
}

/// Tests the fallback for an upstream API rejection: it is treated as a
/// connectivity problem and the upstream error text survives in the
/// diagnostic.
#[tokio::test]
async fn test_fallback_preserves_api_error_detail() -> anyhow::Result<()> {
    setup_tracing();

    let client = SupportClientBuilder::new()
        .ai_provider(Box::new(FailingAiProvider {
            failure: MockFailure::Api("quota exceeded".to_string()),
        }))
        .build()?;

    let request = ChatRequest {
        message: "Where do I find the shuttle routes?".to_string(),
        is_anonymous: false,
    };
    let response = client.respond(&request).await?;

    assert!(!response.success);
    assert_eq!(response.message, CONNECTIVITY_FALLBACK);
    assert!(
        response
            .error
            .as_deref()
            .is_some_and(|e| e.contains("quota exceeded")),
        "The raw upstream error should be preserved"
    );

    Ok(())
}

/// Tests that a whitespace-only message is rejected before any
/// classification or provider work happens.
#[tokio::test]
async fn test_blank_message_is_rejected() -> anyhow::Result<()> {
    setup_tracing();

    let mock_ai_provider = MockAiProvider::new(vec![]);
    let call_history = mock_ai_provider.call_history.clone();

    let client = SupportClientBuilder::new()
        .ai_provider(Box::new(mock_ai_provider))
        .build()?;

    let request = ChatRequest {
        message: "   ".to_string(),
        is_anonymous: false,
    };
    let result = client.respond(&request).await;

    assert!(matches!(result, Err(SupportError::EmptyMessage)));
    assert!(call_history.read().unwrap().is_empty());

    Ok(())
}

/// Tests that the builder refuses to produce a client without a provider.
#[test]
fn test_builder_requires_a_provider() {
    let result = SupportClientBuilder::new().build();
    assert!(matches!(result, Err(SupportError::MissingAiProvider)));
}
