//! # Priority Assignment
//!
//! Assigns a handling priority to a message by walking a fixed cascade from
//! most to least severe. Crisis language only escalates to the top tier when
//! the emotional evidence backs it up, so quoted or hypothetical mentions of
//! crisis words in a neutral message do not page anyone.

use super::{contains_any, Emotion};

/// Handling priority, most severe first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    Critical,
    Urgent,
    High,
    Medium,
    Low,
}

impl Priority {
    /// The wire label used in API responses.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Critical => "critical",
            Priority::Urgent => "urgent",
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

/// Phrases signalling acute mental-health distress.
const CRISIS_KEYWORDS: &[&str] = &[
    "suicide",
    "kill myself",
    "end it all",
    "can't go on",
    "give up",
    "hopeless",
    "crisis",
];

/// Keywords asking for immediate attention.
const EMERGENCY_KEYWORDS: &[&str] = &["emergency", "urgent", "crisis"];

/// Topics that get escalated handling.
const ESCALATION_KEYWORDS: &[&str] = &[
    "technical", "error", "bug", "system", "salary", "benefits", "hr",
];

/// Routine program topics.
const ROUTINE_KEYWORDS: &[&str] = &["schedule", "training", "session", "ilp", "program"];

/// Classifies a message into a [`Priority`] tier.
///
/// The cascade stops at the first tier that matches:
/// 1. critical: a crisis phrase together with detected depression or anxiety
/// 2. urgent: emergency wording, or detected depression on its own
/// 3. high: escalation topics, or detected anxiety, overwhelm, or exam anxiety
/// 4. medium: routine program topics, or detected confusion
/// 5. low: everything else
pub fn classify_priority(message: &str, emotions: &[Emotion]) -> Priority {
    let message_lower = message.to_lowercase();

    let distressed = emotions
        .iter()
        .any(|e| matches!(e, Emotion::Depression | Emotion::Anxiety));
    if distressed && contains_any(&message_lower, CRISIS_KEYWORDS) {
        return Priority::Critical;
    }

    if contains_any(&message_lower, EMERGENCY_KEYWORDS) || emotions.contains(&Emotion::Depression)
    {
        return Priority::Urgent;
    }

    if contains_any(&message_lower, ESCALATION_KEYWORDS)
        || emotions
            .iter()
            .any(|e| matches!(e, Emotion::Anxiety | Emotion::Overwhelm | Emotion::ExamAnxiety))
    {
        return Priority::High;
    }

    if contains_any(&message_lower, ROUTINE_KEYWORDS) || emotions.contains(&Emotion::Confusion) {
        return Priority::Medium;
    }

    Priority::Low
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::detect_emotions;

    fn priority_of(message: &str) -> Priority {
        classify_priority(message, &detect_emotions(message))
    }

    #[test]
    fn test_crisis_language_with_distress_is_critical() {
        assert_eq!(
            priority_of("I feel hopeless and I want to give up on everything"),
            Priority::Critical
        );
    }

    #[test]
    fn test_crisis_keyword_without_distress_stays_below_critical() {
        // "crisis" without emotional evidence lands in the urgent tier.
        assert_eq!(
            priority_of("Our team is handling the server crisis today"),
            Priority::Urgent
        );
    }

    #[test]
    fn test_depression_alone_is_urgent() {
        assert_eq!(priority_of("I have been feeling so lonely here"), Priority::Urgent);
    }

    #[test]
    fn test_escalation_topic_is_high() {
        assert_eq!(priority_of("There is an error when I submit my timesheet"), Priority::High);
    }

    #[test]
    fn test_anxiety_is_high() {
        assert_eq!(priority_of("I'm really worried about tomorrow"), Priority::High);
    }

    #[test]
    fn test_routine_topic_is_medium() {
        assert_eq!(priority_of("What does the ILP schedule look like?"), Priority::Medium);
    }

    #[test]
    fn test_neutral_chitchat_is_low() {
        assert_eq!(priority_of("Good morning!"), Priority::Low);
    }
}
