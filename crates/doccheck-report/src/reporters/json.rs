//! JSON reporter: the report model serialized as-is.

use doccheck_core::errors::ReportError;
use doccheck_core::models::Report;

use super::Reporter;

pub struct JsonReporter {
    pub pretty: bool,
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl Reporter for JsonReporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn generate(&self, report: &Report) -> Result<String, ReportError> {
        let out = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(out)
    }
}
