//! Report rendering errors.

use super::error_code::{self, DocCheckErrorCode};

/// Errors that can occur while rendering or writing a report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Report serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unsupported report format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to write report {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl DocCheckErrorCode for ReportError {
    fn error_code(&self) -> &'static str {
        error_code::REPORT_ERROR
    }
}
