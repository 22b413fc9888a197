//! # Emotional State Detection
//!
//! Scans a message for keyword evidence of the emotional states the support
//! persona knows how to respond to. A message can carry several states at
//! once; detection order is fixed so downstream prompt assembly is stable.

use super::contains_any;

/// An emotional state detectable from message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emotion {
    Anxiety,
    Depression,
    Overwhelm,
    Confusion,
    Frustration,
    Excitement,
    ConfidenceLow,
    Homesick,
    Uncertainty,
    ExamAnxiety,
}

impl Emotion {
    /// Every detectable emotion, in detection order.
    pub const ALL: [Emotion; 10] = [
        Emotion::Anxiety,
        Emotion::Depression,
        Emotion::Overwhelm,
        Emotion::Confusion,
        Emotion::Frustration,
        Emotion::Excitement,
        Emotion::ConfidenceLow,
        Emotion::Homesick,
        Emotion::Uncertainty,
        Emotion::ExamAnxiety,
    ];

    /// The wire label used in API responses.
    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Anxiety => "anxiety",
            Emotion::Depression => "depression",
            Emotion::Overwhelm => "overwhelm",
            Emotion::Confusion => "confusion",
            Emotion::Frustration => "frustration",
            Emotion::Excitement => "excitement",
            Emotion::ConfidenceLow => "confidence_low",
            Emotion::Homesick => "homesick",
            Emotion::Uncertainty => "uncertainty",
            Emotion::ExamAnxiety => "exam_anxiety",
        }
    }

    /// The keyword evidence that triggers this emotion.
    fn keywords(&self) -> &'static [&'static str] {
        match self {
            Emotion::Anxiety => &[
                "anxious", "worried", "nervous", "scared", "afraid", "panic", "stress", "tension",
            ],
            Emotion::Depression => &[
                "sad",
                "depressed",
                "hopeless",
                "lonely",
                "isolated",
                "empty",
                "worthless",
            ],
            Emotion::Overwhelm => &[
                "overwhelmed",
                "too much",
                "can't handle",
                "drowning",
                "pressure",
                "burden",
            ],
            Emotion::Confusion => &[
                "confused",
                "lost",
                "don't understand",
                "unclear",
                "puzzled",
                "bewildered",
            ],
            Emotion::Frustration => &[
                "frustrated",
                "angry",
                "annoyed",
                "irritated",
                "fed up",
                "stuck",
            ],
            Emotion::Excitement => &[
                "excited",
                "happy",
                "thrilled",
                "eager",
                "enthusiastic",
                "motivated",
            ],
            Emotion::ConfidenceLow => &[
                "not good enough",
                "incompetent",
                "stupid",
                "failure",
                "imposter",
                "fake",
            ],
            Emotion::Homesick => &[
                "miss home",
                "homesick",
                "miss family",
                "miss friends",
                "alone",
            ],
            Emotion::Uncertainty => &[
                "uncertain",
                "unsure",
                "doubt",
                "questioning",
                "hesitant",
                "indecisive",
            ],
            Emotion::ExamAnxiety => &[
                "exam stress",
                "exam fear",
                "exam pressure",
                "test anxiety",
                "nervous about exam",
                "scared of exam",
                "afraid of failing",
                "anxious about assessment",
                "assessment pressure",
                "fail the exam",
            ],
        }
    }
}

/// Detects every emotional state whose keywords appear in the message.
///
/// Matching is case-insensitive substring containment, so "I'm Anxious!"
/// registers anxiety. The result preserves detection order and is empty for
/// neutral messages.
pub fn detect_emotions(message: &str) -> Vec<Emotion> {
    let message_lower = message.to_lowercase();
    Emotion::ALL
        .into_iter()
        .filter(|emotion| contains_any(&message_lower, emotion.keywords()))
        .collect()
}
