//! Report assembly.

use chrono::Utc;
use doccheck_core::models::{Conflict, Document, Report, ReportStatus, Severity};
use tracing::info;

/// Assemble a completed report over `documents`.
pub fn generate_report(documents: &[Document], conflicts: Vec<Conflict>) -> Report {
    let by_severity =
        |severity: Severity| conflicts.iter().filter(|c| c.severity == severity).count();
    let high_severity = by_severity(Severity::High);
    let medium_severity = by_severity(Severity::Medium);
    let low_severity = by_severity(Severity::Low);

    let report = Report {
        id: uuid::Uuid::new_v4().simple().to_string(),
        generated_at: Utc::now(),
        documents: documents.iter().map(|d| d.name.clone()).collect(),
        total_conflicts: conflicts.len(),
        high_severity,
        medium_severity,
        low_severity,
        conflicts,
        status: ReportStatus::Completed,
    };
    info!(
        report_id = %report.id,
        total = report.total_conflicts,
        high = report.high_severity,
        "report generated"
    );
    report
}
