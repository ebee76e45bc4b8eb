use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Conflict, Severity};

/// A generated conflict analysis report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: String,
    pub generated_at: DateTime<Utc>,
    /// Names of every analyzed document, in input order.
    pub documents: Vec<String>,
    pub conflicts: Vec<Conflict>,
    pub total_conflicts: usize,
    pub high_severity: usize,
    pub medium_severity: usize,
    pub low_severity: usize,
    pub status: ReportStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Completed,
    Processing,
    Failed,
}

impl Report {
    /// Number of conflicts with the given severity.
    pub fn count(&self, severity: Severity) -> usize {
        match severity {
            Severity::High => self.high_severity,
            Severity::Medium => self.medium_severity,
            Severity::Low => self.low_severity,
        }
    }

    /// Whether any conflict needs immediate attention.
    pub fn has_high_priority(&self) -> bool {
        self.high_severity > 0
    }
}
