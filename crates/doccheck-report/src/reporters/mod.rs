//! Reporters: output formats for conflict reports.
//!
//! 2 formats: Markdown (the downloadable report) and JSON.

pub mod json;
pub mod markdown;

use std::path::{Path, PathBuf};

use doccheck_core::config::ReportFormat;
use doccheck_core::constants::REPORT_FILE_PREFIX;
use doccheck_core::errors::ReportError;
use doccheck_core::models::Report;
use tracing::debug;

/// Trait for report rendering.
pub trait Reporter: Send + Sync {
    fn name(&self) -> &'static str;
    fn generate(&self, report: &Report) -> Result<String, ReportError>;
}

/// Create a reporter by format name.
pub fn create_reporter(format: &str) -> Result<Box<dyn Reporter>, ReportError> {
    match format {
        "markdown" | "md" => Ok(Box::new(markdown::MarkdownReporter)),
        "json" => Ok(Box::new(json::JsonReporter::default())),
        other => Err(ReportError::UnsupportedFormat(other.to_string())),
    }
}

/// Reporter for an already-validated format.
pub fn reporter_for(format: ReportFormat) -> Box<dyn Reporter> {
    match format {
        ReportFormat::Markdown => Box::new(markdown::MarkdownReporter),
        ReportFormat::Json => Box::new(json::JsonReporter::default()),
    }
}

/// List all available reporter format names.
pub fn available_formats() -> &'static [&'static str] {
    &["markdown", "json"]
}

/// `conflict-report-{id}.{ext}`
pub fn report_file_name(report: &Report, format: ReportFormat) -> String {
    format!("{REPORT_FILE_PREFIX}{}.{}", report.id, format.extension())
}

/// Render `report` and write it into `dir`, creating the directory if
/// needed. Returns the written path.
pub fn write_report(
    report: &Report,
    format: ReportFormat,
    dir: &Path,
) -> Result<PathBuf, ReportError> {
    let rendered = reporter_for(format).generate(report)?;
    let path = dir.join(report_file_name(report, format));
    let io_err = |source| ReportError::Io {
        path: path.display().to_string(),
        source,
    };
    std::fs::create_dir_all(dir).map_err(io_err)?;
    std::fs::write(&path, rendered).map_err(io_err)?;
    debug!(path = %path.display(), %format, "report written");
    Ok(path)
}
