//! # Chat Route Handlers
//!
//! The main chat endpoint. Validation failures here return the supportive
//! 400 bodies the frontend relies on, which is why the payload is taken as
//! raw JSON instead of letting the extractor reject it.

use crate::{errors::AppError, state::AppState};
use axum::{extract::State, Json};
use maya::{ChatRequest, ChatResponse};
use serde_json::Value;
use tracing::info;

/// The handler for the `/api/chat` endpoint.
///
/// Deserializes the payload, guards against missing or empty messages, and
/// hands the request to the support client. Upstream generation failures are
/// not HTTP errors; they come back as a `success: false` body with status
/// 200, so the frontend can always render `message`.
pub async fn chat_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<ChatResponse>, AppError> {
    let request: ChatRequest =
        serde_json::from_value(payload).map_err(|_| AppError::MissingMessage)?;

    if request.message.trim().is_empty() {
        return Err(AppError::EmptyMessage);
    }

    info!(
        "Received chat message ({} chars, anonymous: {})",
        request.message.len(),
        request.is_anonymous
    );
    let response = app_state.client.respond(&request).await?;
    Ok(Json(response))
}
