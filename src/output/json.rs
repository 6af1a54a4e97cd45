use crate::error::Result;
use crate::report::Report;

use super::ReportFormatter;

/// Serializes reports as pretty-printed JSON for the dashboard API.
///
/// Non-finite chart percentages (an all-zero graph) serialize as `null`.
pub struct JsonFormatter;

impl JsonFormatter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
