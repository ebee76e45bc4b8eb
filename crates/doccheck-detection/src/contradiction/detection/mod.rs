//! Contradiction detection strategy registry.
//!
//! 3 detection strategies run over the cross product of two documents'
//! segments:
//! - numeric values that differ in similar context
//! - times of day that differ in similar context
//! - opposing requirement/policy terms in similar context

pub mod numeric;
pub mod policy;
pub mod time;

use doccheck_core::models::{ContradictionMatch, Segment};

use super::scan::DocumentPair;
use crate::engine::MatcherConfig;

/// Run every strategy over one document pair and collect all matches,
/// in strategy order: numeric, time, policy.
pub fn detect_all(
    segments1: &[Segment],
    segments2: &[Segment],
    documents: DocumentPair<'_>,
    config: &MatcherConfig,
) -> Vec<ContradictionMatch> {
    let mut results = numeric::detect(segments1, segments2, documents, config);
    results.extend(time::detect(segments1, segments2, documents, config));
    results.extend(policy::detect(segments1, segments2, documents, config));
    results
}
