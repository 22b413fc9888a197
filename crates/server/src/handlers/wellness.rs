//! # Wellness Route Handlers
//!
//! The wellness check-in endpoint. Replies come from fixed threshold
//! buckets, so check-ins keep working even when the generation API is down.

use axum::Json;
use maya::wellness::wellness_reply;
use serde::Deserialize;
use serde_json::{json, Value};

fn default_mood() -> String {
    "neutral".to_string()
}

fn default_stress_level() -> f64 {
    5.0
}

/// The body for a wellness check-in. Both fields are optional.
#[derive(Deserialize)]
pub struct WellnessCheckRequest {
    #[serde(default = "default_mood")]
    pub mood: String,
    #[serde(default = "default_stress_level")]
    pub stress_level: f64,
}

/// The handler for the `/api/wellness-check` endpoint.
pub async fn wellness_check_handler(Json(payload): Json<WellnessCheckRequest>) -> Json<Value> {
    let reply = wellness_reply(payload.stress_level);
    Json(json!({
        "success": true,
        "message": reply.message,
        "mood": payload.mood,
        "stress_level": payload.stress_level,
        "recommendations": reply.recommendations,
    }))
}
