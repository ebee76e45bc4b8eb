//! Opposing requirement and policy terms.

use doccheck_core::models::{ContradictionMatch, Segment, Severity};

use crate::contradiction::scan::{scan_segment_pairs, DocumentPair};
use crate::engine::MatcherConfig;

/// Antonym pairs. Matched as case-insensitive substrings.
pub const OPPOSING_TERMS: &[(&str, &str)] = &[
    ("required", "optional"),
    ("mandatory", "voluntary"),
    ("must", "may"),
    ("shall", "should"),
    ("minimum", "maximum"),
    ("before", "after"),
    ("early", "late"),
    ("allowed", "prohibited"),
    ("permitted", "forbidden"),
];

/// Which side of an antonym pair a statement mentions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermHit {
    /// Index into [`OPPOSING_TERMS`].
    pub pair: usize,
    /// `true` for the first term of the pair, `false` for the second.
    pub first: bool,
}

/// All antonym-pair terms mentioned by `text`.
pub fn term_hits(text: &str) -> Vec<TermHit> {
    let lower = text.to_lowercase();
    let mut hits = Vec::new();
    for (pair, (a, b)) in OPPOSING_TERMS.iter().enumerate() {
        if lower.contains(a) {
            hits.push(TermHit { pair, first: true });
        }
        if lower.contains(b) {
            hits.push(TermHit { pair, first: false });
        }
    }
    hits
}

/// Whether one text uses a term and the other its antonym.
pub fn has_opposing_terms(text1: &str, text2: &str) -> bool {
    opposing(&term_hits(text1), &term_hits(text2))
}

fn opposing(hits1: &[TermHit], hits2: &[TermHit]) -> bool {
    hits1
        .iter()
        .any(|h1| hits2.iter().any(|h2| h1.pair == h2.pair && h1.first != h2.first))
}

/// At most one medium-severity match per statement pair.
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
        config.policy_similarity_threshold,
        term_hits,
        |hits1, hits2| {
            if opposing(hits1, hits2) {
                vec![Severity::Medium]
            } else {
                Vec::new()
            }
        },
    )
}
