//! # General Route Handlers
//!
//! This module contains the general-purpose Axum handlers for the
//! `maya-server`: the root, the health check, the FAQ listing, and the
//! static dashboard stats.

use axum::Json;
use chrono::Utc;
use maya::faq::FAQ_TABLE;
use serde_json::{json, Value};

/// The handler for the root (`/`) endpoint.
pub async fn root() -> &'static str {
    "maya server is running."
}

/// The handler for the health check (`/api/health`) endpoint.
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "TCS ILP Emotional Support Chatbot API",
        "version": "2.0.0",
        "features": ["emotional_intelligence", "crisis_detection", "empathetic_responses"],
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

/// The handler for the FAQ listing (`/api/faq`) endpoint.
pub async fn faq_handler() -> Json<Value> {
    Json(json!({
        "success": true,
        "faqs": FAQ_TABLE,
        "total": FAQ_TABLE.len(),
    }))
}

/// The handler for the dashboard stats (`/api/stats`) endpoint.
///
/// The numbers are static placeholders; no real aggregation exists yet.
pub async fn stats_handler() -> Json<Value> {
    Json(json!({
        "totalQueries": 1247,
        "resolvedQueries": 1198,
        "avgResponseTime": 1.8,
        "uptime": "99.9%",
        "satisfaction": 4.9,
        "categories": {
            "wellness": 312,
            "technical": 234,
            "program": 298,
            "schedule": 156,
            "hr": 123,
            "social": 89,
            "career": 67
        },
        "priorities": {
            "critical": 3,
            "urgent": 89,
            "high": 234,
            "medium": 456,
            "low": 298
        },
        "emotional_metrics": {
            "emotions_detected": 789,
            "support_sessions": 445,
            "crisis_interventions": 3,
            "positive_feedback": 94.2
        },
        "wellness_stats": {
            "avg_stress_level": 5.2,
            "wellness_checks": 156,
            "improved_mood": 78.5
        }
    }))
}
