//! # Topic Categorization
//!
//! Buckets a message into a support topic. The rules are checked in a fixed
//! order and the first hit wins, so wellness concerns take precedence over
//! the more administrative buckets when a message straddles both.

use super::contains_any;

/// A support topic bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Wellness,
    Technical,
    Hr,
    Schedule,
    Program,
    Social,
    Career,
    General,
}

impl Category {
    /// The wire label used in API responses.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Wellness => "wellness",
            Category::Technical => "technical",
            Category::Hr => "hr",
            Category::Schedule => "schedule",
            Category::Program => "program",
            Category::Social => "social",
            Category::Career => "career",
            Category::General => "general",
        }
    }
}

/// Categorization rules, checked top to bottom.
const CATEGORY_RULES: &[(Category, &[&str])] = &[
    (
        Category::Wellness,
        &[
            "mental",
            "health",
            "stress",
            "anxiety",
            "wellness",
            "overwhelm",
            "sad",
            "depression",
            "worried",
        ],
    ),
    (
        Category::Technical,
        &[
            "technical",
            "error",
            "bug",
            "system",
            "computer",
            "login",
            "access",
        ],
    ),
    (
        Category::Hr,
        &["salary", "benefits", "hr", "payroll", "leave", "policy"],
    ),
    (
        Category::Schedule,
        &[
            "schedule", "training", "session", "time", "calendar", "timing",
        ],
    ),
    (
        Category::Program,
        &[
            "ilp",
            "program",
            "learning",
            "course",
            "curriculum",
            "assessment",
        ],
    ),
    (
        Category::Social,
        &[
            "team",
            "colleagues",
            "friends",
            "social",
            "networking",
            "culture",
        ],
    ),
    (
        Category::Career,
        &[
            "career",
            "growth",
            "skills",
            "development",
            "future",
            "promotion",
        ],
    ),
];

/// Classifies a message into a [`Category`], defaulting to
/// [`Category::General`] when no rule matches.
pub fn classify_category(message: &str) -> Category {
    let message_lower = message.to_lowercase();
    CATEGORY_RULES
        .iter()
        .find(|(_, keywords)| contains_any(&message_lower, keywords))
        .map(|(category, _)| *category)
        .unwrap_or(Category::General)
}
