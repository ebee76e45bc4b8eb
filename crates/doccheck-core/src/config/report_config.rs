//! Report output configuration.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Output format for generated reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Markdown,
    Json,
}

impl ReportFormat {
    /// File extension used when writing a report of this format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Markdown => "md",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Markdown => write!(f, "markdown"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl FromStr for ReportFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "markdown" | "md" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::ValidationFailed {
                field: "report.format".to_string(),
                message: format!("unknown format '{other}', expected markdown or json"),
            }),
        }
    }
}

/// Configuration for report rendering.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ReportConfig {
    /// Output format. Default: markdown.
    pub format: Option<ReportFormat>,
    /// Directory to write `conflict-report-{id}.{ext}` into. `None` = stdout.
    pub output_dir: Option<PathBuf>,
}

impl ReportConfig {
    pub fn effective_format(&self) -> ReportFormat {
        self.format.unwrap_or_default()
    }
}
