//! Data model shared across the workspace.

pub mod conflict;
pub mod contradiction;
pub mod document;
pub mod report;
pub mod segment;

pub use conflict::{Conflict, ConflictingText};
pub use contradiction::{ContradictionMatch, ExtractedNumber, MatchType, Severity};
pub use document::{Document, DocumentKind};
pub use report::{Report, ReportStatus};
pub use segment::Segment;
