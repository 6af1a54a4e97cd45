use std::io::Write;

use crate::error::Result;
use crate::report::Report;

use super::ReportFormatter;

/// Human-readable report summary for terminal use.
pub struct TextFormatter;

impl TextFormatter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let mut output = Vec::new();

        if report.is_degraded() {
            writeln!(output, "No stylesheet facts available.").ok();
            return Ok(String::from_utf8_lossy(&output).to_string());
        }

        if let Some(ref totals) = report.totals {
            writeln!(output, "Totals:").ok();
            for (property, count) in &totals.properties {
                writeln!(output, "  {property}: {count}").ok();
            }
            writeln!(output, "  font sizes: {}", totals.font_size_count).ok();
            writeln!(
                output,
                "  distinct properties: {}",
                totals.total_distinct_properties
            )
            .ok();
            writeln!(output).ok();
        }

        if let Some(ref breakdown) = report.property_breakdown {
            writeln!(output, "Property usage:").ok();
            for entry in breakdown {
                writeln!(output, "  {:>6}%  {}", entry.percentage_pretty, entry.property).ok();
            }
            writeln!(output).ok();
        }

        if let Some(ref uniques) = report.uniques {
            if !uniques.font_size_sorted.is_empty() {
                writeln!(
                    output,
                    "Font sizes (largest first): {}",
                    uniques.font_size_sorted.join(", ")
                )
                .ok();
            }
            if !uniques.font_family.is_empty() {
                writeln!(output, "Font families: {}", uniques.font_family.join(", ")).ok();
            }
        }

        if let Some(ref media_queries) = report.media_queries
            && !media_queries.is_empty()
        {
            writeln!(output, "Media queries: {}", media_queries.join(", ")).ok();
        }

        Ok(String::from_utf8_lossy(&output).to_string())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
