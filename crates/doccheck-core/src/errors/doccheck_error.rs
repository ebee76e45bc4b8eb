//! Top-level error aggregating subsystem errors via `From` conversions.

use super::error_code::DocCheckErrorCode;
use super::{ConfigError, DocumentError, ReportError};

#[derive(Debug, thiserror::Error)]
pub enum DocCheckError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    #[error("Report error: {0}")]
    Report(#[from] ReportError),
}

impl DocCheckErrorCode for DocCheckError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Document(e) => e.error_code(),
            Self::Report(e) => e.error_code(),
        }
    }
}

pub type DocCheckResult<T> = Result<T, DocCheckError>;
