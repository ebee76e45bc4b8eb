//! # doccheck-report
//!
//! Turns contradiction matches into user-facing conflicts, assembles them
//! into a report, and renders the report as Markdown or JSON.

pub mod builder;
pub mod conflicts;
pub mod reporters;

pub use builder::generate_report;
pub use conflicts::{conflict_from_match, conflicts_from_matches, ConflictCategory};
pub use reporters::{create_reporter, report_file_name, reporter_for, write_report, Reporter};
