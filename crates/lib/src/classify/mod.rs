//! # Message Classification
//!
//! Keyword-driven analysis of an incoming message. Three independent
//! classifiers run over the same lowercased text: emotional state detection,
//! priority assignment, and topic categorization. All of them are pure
//! functions so the routing decisions stay deterministic and testable.

pub mod category;
pub mod emotion;
pub mod priority;

pub use category::{classify_category, Category};
pub use emotion::{detect_emotions, Emotion};
pub use priority::{classify_priority, Priority};

/// Case-insensitive substring containment over a keyword list.
///
/// Callers are expected to lowercase the message once and reuse it.
pub(crate) fn contains_any(message_lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| message_lower.contains(kw))
}
