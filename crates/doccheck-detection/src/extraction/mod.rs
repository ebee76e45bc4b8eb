//! Sentence extraction.
//!
//! Splits raw document text into candidate statements and keeps the ones
//! that mention a conflict-prone topic.

pub mod vocabulary;

use std::sync::LazyLock;

use doccheck_core::constants::MIN_SEGMENT_CHARS;
use doccheck_core::models::Segment;
use regex::Regex;

/// One or more sentence terminators in a row.
static SENTENCE_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]+").unwrap());

/// Extract the relevant sentences of a document.
///
/// Fragments are numbered over the full split, so a segment's `position`
/// and `context` still point at the right sentence after short or
/// off-topic fragments have been dropped.
pub fn extract_relevant_sentences(text: &str, document_label: &str) -> Vec<Segment> {
    SENTENCE_BOUNDARY
        .split(text)
        .enumerate()
        .filter_map(|(index, fragment)| {
            let trimmed = fragment.trim();
            if trimmed.chars().count() <= MIN_SEGMENT_CHARS {
                return None;
            }
            if !vocabulary::has_conflict_indicator(&fragment.to_lowercase()) {
                return None;
            }
            Some(Segment {
                text: trimmed.to_string(),
                context: format!("Sentence {} in {}", index + 1, document_label),
                position: index,
            })
        })
        .collect()
}
