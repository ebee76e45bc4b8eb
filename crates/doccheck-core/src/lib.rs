//! # doccheck-core
//!
//! Foundation crate for doccheck.
//! Defines the document, segment, match, conflict and report models, the
//! error hierarchy, layered configuration, and shared constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;

// Re-export the most commonly used types at the crate root.
pub use config::DocCheckConfig;
pub use errors::{DocCheckError, DocCheckResult};
pub use models::{
    Conflict, ContradictionMatch, Document, DocumentKind, MatchType, Report, Segment, Severity,
};
