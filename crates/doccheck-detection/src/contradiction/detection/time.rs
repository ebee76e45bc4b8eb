//! Conflicting times of day.

use std::sync::LazyLock;

use doccheck_core::models::{ContradictionMatch, Segment, Severity};
use regex::Regex;

use crate::contradiction::scan::{scan_segment_pairs, DocumentPair};
use crate::engine::MatcherConfig;

/// Applied in order; each contributes all of its matches.
static TIME_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"[0-9]{1,2}:[0-9]{2}\s*(?i:AM|PM)",
        r"[0-9]{1,2}\s*(?i:AM|PM)",
        r"(?i)midnight",
        r"(?i)noon",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Extract raw time-of-day substrings.
///
/// `10:00 PM` yields both `10:00 PM` and `00 PM`, because the hour-only
/// pattern also fires on the minutes.
pub fn extract_times(text: &str) -> Vec<&str> {
    TIME_PATTERNS
        .iter()
        .flat_map(|re| re.find_iter(text).map(|m| m.as_str()))
        .collect()
}

/// Flag every pair of differing time strings. Comparison is on the raw
/// substrings, so `10 PM` and `10:00 PM` differ while two `noon`s do not.
pub fn detect(
    segments1: &[Segment],
    segments2: &[Segment],
    documents: DocumentPair<'_>,
    config: &MatcherConfig,
) -> Vec<ContradictionMatch> {
    scan_segment_pairs(
        segments1,
        segments2,
        documents,
        config.time_similarity_threshold,
        |text| {
            extract_times(text)
                .into_iter()
                .map(str::to_owned)
                .collect::<Vec<String>>()
        },
        judge,
    )
}

fn judge(times1: &[String], times2: &[String]) -> Vec<Severity> {
    times1
        .iter()
        .flat_map(|t1| times2.iter().filter(move |t2| t1 != *t2))
        .map(|_| Severity::High)
        .collect()
}
