mod json;
mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

use crate::error::Result;
use crate::report::Report;

/// Trait for formatting a report into an output format.
pub trait ReportFormatter {
    /// Format the report into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, report: &Report) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "text" => Ok(Self::Text),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

/// Formatter instance for the requested format.
#[must_use]
pub fn formatter_for(format: OutputFormat) -> Box<dyn ReportFormatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter::new()),
        OutputFormat::Text => Box::new(TextFormatter::new()),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
