//! Stable machine-readable error codes.

/// Implemented by every doccheck error enum.
pub trait DocCheckErrorCode {
    /// Stable code, e.g. `CONFIG_ERROR`.
    fn error_code(&self) -> &'static str;
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const DOCUMENT_ERROR: &str = "DOCUMENT_ERROR";
pub const REPORT_ERROR: &str = "REPORT_ERROR";
