//! Document loading errors.

use super::error_code::{self, DocCheckErrorCode};

/// Errors that can occur while reading a document from disk.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("Failed to read document {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Document name must not be empty")]
    EmptyName,

    #[error("Document {path} is {size} bytes, limit is {limit}")]
    TooLarge { path: String, size: u64, limit: u64 },
}

impl DocCheckErrorCode for DocumentError {
    fn error_code(&self) -> &'static str {
        error_code::DOCUMENT_ERROR
    }
}
