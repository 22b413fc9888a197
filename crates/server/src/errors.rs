use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use maya::SupportError;
use serde_json::json;
use tracing::error;

/// A custom error type for the server application.
///
/// This enum encapsulates the errors that can occur while serving a request,
/// allowing them to be converted into the supportive HTTP responses the API
/// promises. Validation failures keep the 400 class; everything unexpected
/// becomes a 500 that still wraps the error in the `success: false` envelope.
pub enum AppError {
    /// The chat payload had no usable `message` field.
    MissingMessage,
    /// The chat message was empty after trimming.
    EmptyMessage,
    /// Generic internal server errors.
    Internal(anyhow::Error),
}

/// Conversion from `SupportError` to `AppError`.
impl From<SupportError> for AppError {
    fn from(err: SupportError) -> Self {
        match err {
            SupportError::EmptyMessage => AppError::EmptyMessage,
            other => AppError::Internal(other.into()),
        }
    }
}

/// Conversion from `anyhow::Error` to `AppError`.
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, body) = match self {
            AppError::MissingMessage => (
                StatusCode::BAD_REQUEST,
                json!({
                    "success": false,
                    "error": "Message is required",
                    "supportive_message": "I'm here to help! Please share what's on your mind about your ILP journey. 😊",
                }),
            ),
            AppError::EmptyMessage => (
                StatusCode::BAD_REQUEST,
                json!({
                    "success": false,
                    "error": "Please enter a message",
                    "supportive_message": "I notice you haven't typed anything yet. Take your time - I'm here to listen and help with whatever you'd like to discuss about your ILP experience! 💙",
                }),
            ),
            AppError::Internal(err) => {
                error!("Internal server error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "success": false,
                        "message": "I encountered a technical issue, but please don't worry - this has nothing to do with your question! I'm here to support you, so please try again. Your ILP journey matters, and so do your questions! 🌟",
                        "error": err.to_string(),
                    }),
                )
            }
        };

        (status_code, Json(body)).into_response()
    }
}
