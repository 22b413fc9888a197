//! # Response Post-processing
//!
//! Cleanup applied to text coming back from the generation API, plus the
//! empathy append that guarantees every outgoing response ends on a
//! supportive note. The append takes the random source as a parameter so
//! tests can pin it down with a seeded generator.

use rand::seq::SliceRandom;
use rand::Rng;
use regex::Regex;

use crate::errors::SupportError;
use crate::prompts::{CLOSING_MARKERS, SUPPORTIVE_CLOSINGS};

/// Leading markers that identify an echoed instruction preamble.
const ECHOED_PREAMBLE_MARKERS: &[&str] = &["SYSTEM CONTEXT:", "USER MESSAGE:", "You are Maya"];

/// Normalizes raw generated text.
///
/// Models occasionally echo the instruction block back before answering.
/// When the text starts with a known marker, the leading block up to the
/// first blank line is dropped. Runs of three or more newlines collapse to
/// a paragraph break, and surrounding whitespace is trimmed.
pub fn clean_generated_text(text: &str) -> Result<String, SupportError> {
    let mut cleaned = text.trim();

    if ECHOED_PREAMBLE_MARKERS
        .iter()
        .any(|marker| cleaned.starts_with(marker))
    {
        if let Some(pos) = cleaned.find("\n\n") {
            cleaned = cleaned[pos..].trim_start();
        }
    }

    let collapsed = Regex::new(r"\n{3,}")?.replace_all(cleaned, "\n\n");
    Ok(collapsed.trim().to_string())
}

/// True when the text already carries one of the closing marker phrases.
pub fn has_supportive_closing(text: &str) -> bool {
    let lower = text.to_lowercase();
    CLOSING_MARKERS.iter().any(|marker| lower.contains(marker))
}

/// Appends a randomly chosen supportive closing unless one is present.
///
/// Every closing in the pool carries a marker phrase, so applying this twice
/// never stacks a second closing.
pub fn append_supportive_closing<R: Rng + ?Sized>(text: &str, rng: &mut R) -> String {
    if has_supportive_closing(text) {
        return text.to_string();
    }

    let closing = SUPPORTIVE_CLOSINGS
        .choose(rng)
        .unwrap_or(&SUPPORTIVE_CLOSINGS[0]);
    format!("{text}\n\n{closing}")
}
