use super::{handlers, state::AppState};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

/// Creates the Axum router with all the application routes.
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/api/chat", post(handlers::chat_handler))
        .route("/api/faq", get(handlers::faq_handler))
        .route("/api/health", get(handlers::health_check))
        .route(
            "/api/wellness-check",
            post(handlers::wellness_check_handler),
        )
        .route("/api/stats", get(handlers::stats_handler))
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
}
