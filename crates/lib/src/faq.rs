//! # FAQ Table and Matcher
//!
//! A small static table of the questions freshers ask over and over.
//! Matching a message here short-circuits the generation call entirely, so
//! the most common questions get an instant, fixed answer. The matcher is a
//! first-match-wins keyword scan in table order.

use serde::Serialize;

use crate::classify::{contains_any, Emotion};

/// A single FAQ entry, served as-is over the API and scanned by the matcher.
#[derive(Debug, Clone, Serialize)]
pub struct FaqEntry {
    pub id: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
    pub keywords: &'static [&'static str],
}

/// The FAQ table, scanned in order.
pub const FAQ_TABLE: &[FaqEntry] = &[
    FaqEntry {
        id: "passing_marks",
        question: "What is the passing mark in ILP exams?",
        answer: "The qualifying mark for ILP assessments is 60%. Assessments are spread across the program so no single test carries all the weight, and your batch coordinator shares the exact scoring pattern before each one.",
        keywords: &[
            "passing mark",
            "passing marks",
            "pass mark",
            "minimum marks",
            "qualifying marks",
            "pass percentage",
        ],
    },
    FaqEntry {
        id: "ilp_duration",
        question: "How long does the ILP program last?",
        answer: "ILP typically runs for 8 to 12 weeks depending on your stream and business unit. Your exact end date shows up on your learning plan once your batch is confirmed.",
        keywords: &[
            "how long is ilp",
            "how long does ilp",
            "ilp duration",
            "duration of ilp",
            "how many weeks",
            "weeks of training",
            "length of ilp",
            "ilp last",
        ],
    },
    FaqEntry {
        id: "stipend",
        question: "When is the stipend credited during ILP?",
        answer: "Your stipend is processed at the end of each month and usually reflects in your account by the 5th of the following month. If it hasn't arrived by then, raise a ticket with HR through the portal and they will sort it out quickly.",
        keywords: &[
            "stipend",
            "salary credit",
            "when is salary",
            "salary date",
            "first salary",
        ],
    },
    FaqEntry {
        id: "leave_policy",
        question: "Can I take leave during ILP?",
        answer: "Planned leave during ILP needs prior approval from your batch coordinator, and emergencies are always accommodated. Just inform your coordinator as early as you can so sessions and assessments can be rescheduled for you.",
        keywords: &[
            "take leave",
            "leave policy",
            "leave during",
            "apply for leave",
            "sick leave",
        ],
    },
    FaqEntry {
        id: "dress_code",
        question: "What is the dress code during ILP?",
        answer: "The dress code is business casuals from Monday to Thursday and smart casuals on Friday. Formal wear is expected for assessments, client sessions, and official ceremonies.",
        keywords: &["dress code", "formals", "what to wear", "attire"],
    },
    FaqEntry {
        id: "location_allocation",
        question: "How are base locations allocated after ILP?",
        answer: "Base locations are allocated by business need in the final week of ILP, taking your preferences into account where possible. You will be asked to submit location preferences through the portal before allocation happens.",
        keywords: &[
            "base location",
            "location allocation",
            "posting",
            "which city",
            "relocation",
        ],
    },
    FaqEntry {
        id: "system_access",
        question: "What should I do if I cannot access the learning platform?",
        answer: "For learning platform access issues, first try a password reset from the login page. If that doesn't work, raise a ticket with the IT helpdesk or reach out to your batch coordinator, and keep a screenshot of the error handy.",
        keywords: &[
            "cannot access",
            "can't login",
            "login issue",
            "platform access",
            "access issue",
            "password reset",
        ],
    },
    FaqEntry {
        id: "re_assessment",
        question: "What happens if I fail an ILP assessment?",
        answer: "Don't worry, one assessment does not decide your ILP outcome. You get a re-assessment attempt after a guided revision period with your mentor, and most freshers clear it comfortably the second time.",
        keywords: &[
            "fail an assessment",
            "failed assessment",
            "reassessment",
            "re-assessment",
            "retest",
            "fail the assessment",
        ],
    },
];

/// Acknowledgment prepended to a FAQ answer when the message carried
/// emotional signals, so a canned answer never reads as dismissive.
pub const EMOTIONAL_FAQ_ACK: &str = "I can sense there's a lot on your mind right now, so let me make this one easy for you. ";

/// Returns the first FAQ entry whose keywords appear in the message.
pub fn match_faq(message: &str) -> Option<&'static FaqEntry> {
    let message_lower = message.to_lowercase();
    FAQ_TABLE
        .iter()
        .find(|entry| contains_any(&message_lower, entry.keywords))
}

/// Intro/outro framing for the entries that warrant a personal touch.
/// Entries without a pair are served as the raw answer.
fn empathy_templates(id: &str) -> Option<(&'static str, &'static str)> {
    match id {
        "passing_marks" => Some((
            "Great question - knowing where the bar sits makes preparing so much easier! ",
            " Focus on steady preparation and the marks will follow. 📚",
        )),
        "ilp_duration" => Some((
            "Happy to clear this up! ",
            " The weeks go by faster than you'd expect once sessions begin. 😊",
        )),
        "stipend" => Some((
            "Money questions are completely fair to ask! ",
            " If anything about the credit looks off, HR will help you straighten it out.",
        )),
        "leave_policy" => Some((
            "Life happens, and the program understands that! ",
            " Your wellbeing always comes before any session.",
        )),
        "re_assessment" => Some((
            "First, take a deep breath - this is far more common than you think! ",
            " Many successful TCSers needed a second attempt during ILP. 💪",
        )),
        _ => None,
    }
}

/// Assembles the response text for a matched FAQ entry.
///
/// The emotional acknowledgment comes first when emotions were detected,
/// then the intro/outro pair for the entry if one exists, otherwise the
/// bare answer.
pub fn faq_response(entry: &FaqEntry, emotions: &[Emotion]) -> String {
    let mut response = String::new();
    if !emotions.is_empty() {
        response.push_str(EMOTIONAL_FAQ_ACK);
    }
    match empathy_templates(entry.id) {
        Some((intro, outro)) => {
            response.push_str(intro);
            response.push_str(entry.answer);
            response.push_str(outro);
        }
        None => response.push_str(entry.answer),
    }
    response
}
