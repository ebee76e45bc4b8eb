//! Error handling for doccheck.
//! One error enum per subsystem, `thiserror` only.
//!
//! The contradiction detector itself never fails; these errors cover the
//! surfaces around it (configuration, document loading, report output).

pub mod config_error;
pub mod doccheck_error;
pub mod document_error;
pub mod error_code;
pub mod report_error;

pub use config_error::ConfigError;
pub use doccheck_error::{DocCheckError, DocCheckResult};
pub use document_error::DocumentError;
pub use error_code::DocCheckErrorCode;
pub use report_error::ReportError;
