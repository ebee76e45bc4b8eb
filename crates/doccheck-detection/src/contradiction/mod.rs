//! Contradiction detection, scoring and ranking.
//!
//! Three detection strategies share one pairwise scan; their output is
//! merged across document pairs, deduplicated and ranked here.

pub mod detection;
pub mod scan;
pub mod similarity;

use std::collections::HashSet;

use doccheck_core::models::ContradictionMatch;

/// Drop matches whose `(text1, text2)` pair was already seen.
/// Comparison is exact and case-sensitive; the first occurrence wins.
pub fn deduplicate(matches: Vec<ContradictionMatch>) -> Vec<ContradictionMatch> {
    let mut seen: HashSet<(String, String)> = HashSet::with_capacity(matches.len());
    matches
        .into_iter()
        .filter(|m| seen.insert((m.text1.clone(), m.text2.clone())))
        .collect()
}

/// Sort by confidence, highest first. Stable: ties keep input order.
pub fn rank(matches: &mut [ContradictionMatch]) {
    matches.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
}

/// Deduplicate, rank and keep at most `limit` matches.
pub fn rank_matches(matches: Vec<ContradictionMatch>, limit: usize) -> Vec<ContradictionMatch> {
    let mut unique = deduplicate(matches);
    rank(&mut unique);
    unique.truncate(limit);
    unique
}
