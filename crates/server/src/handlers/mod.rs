//! # API Route Handlers
//!
//! This module organizes all the Axum route handlers for the `maya-server`.
//! The handlers are split into logical sub-modules based on their
//! functionality (chat, wellness, general).

// Sub-modules for different handler categories.
pub mod chat;
pub mod general;
pub mod wellness;

// Re-export all handlers from the sub-modules to make them easily accessible
// to the router under a single `handlers::` path.
pub use chat::*;
pub use general::*;
pub use wellness::*;
