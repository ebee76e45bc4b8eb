//! # doccheck-detection
//!
//! Heuristic pairwise contradiction detection across short documents.
//!
//! ## Pipeline
//! 1. **Extraction**: split each document into sentences and keep those
//!    that mention a conflict-prone topic (deadlines, percentages,
//!    requirement modality, penalties, attendance, ...).
//! 2. **Detection**: for every pair of documents, compare every pair of
//!    kept sentences with three strategies:
//!    - numeric values (percentages, durations)
//!    - times of day (`10:00 PM`, `noon`)
//!    - opposing terms (`required` vs `optional`, `before` vs `after`)
//! 3. **Ranking**: drop duplicate statement pairs, sort by confidence,
//!    keep the top matches.
//!
//! Everything here is pure and total: any input text yields a (possibly
//! empty) result, never an error.

pub mod contradiction;
pub mod engine;
pub mod extraction;

pub use engine::{analyze, ContradictionMatcher, MatcherConfig};
pub use extraction::extract_relevant_sentences;
