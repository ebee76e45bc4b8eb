//! Markdown reporter: the downloadable conflict report.

use doccheck_core::errors::ReportError;
use doccheck_core::models::{Conflict, Report};

use super::Reporter;

pub struct MarkdownReporter;

impl MarkdownReporter {
    fn conflict_section(index: usize, conflict: &Conflict) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "\n### Conflict {}: {}\n",
            index + 1,
            conflict.description
        ));
        out.push_str(&format!("- Type: {}\n", conflict.conflict_type));
        out.push_str(&format!("- Severity: {}\n", conflict.severity));
        out.push_str(&format!(
            "- Affected Documents: {}\n",
            conflict.documents.join(", ")
        ));

        out.push_str("\n#### Conflicting Text:\n");
        for text in &conflict.conflicting_text {
            out.push_str(&format!(
                "\n- **{}**: \"{}\"\n  Context: {}\n",
                text.document, text.text, text.context
            ));
        }

        out.push_str("\n#### Suggestions:\n");
        let suggestions: Vec<String> = conflict
            .suggestions
            .iter()
            .map(|s| format!("- {s}"))
            .collect();
        out.push_str(&suggestions.join("\n"));
        out.push('\n');
        out
    }
}

impl Reporter for MarkdownReporter {
    fn name(&self) -> &'static str {
        "markdown"
    }

    fn generate(&self, report: &Report) -> Result<String, ReportError> {
        let mut out = String::new();

        out.push_str("# Document Conflict Analysis Report\n");
        out.push_str(&format!(
            "Generated on: {}\n\n",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));

        out.push_str("## Summary\n");
        out.push_str(&format!(
            "- Documents Analyzed: {}\n",
            report.documents.join(", ")
        ));
        out.push_str(&format!("- Total Conflicts: {}\n", report.total_conflicts));
        out.push_str(&format!("- High Priority: {}\n", report.high_severity));
        out.push_str(&format!("- Medium Priority: {}\n", report.medium_severity));
        out.push_str(&format!("- Low Priority: {}\n", report.low_severity));

        out.push_str("\n## Detailed Conflicts\n");
        for (i, conflict) in report.conflicts.iter().enumerate() {
            out.push_str(&Self::conflict_section(i, conflict));
        }

        Ok(out)
    }
}
