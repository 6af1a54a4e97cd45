mod metrics;
mod types;

pub use metrics::DeclarationMetrics;
pub use types::{Declaration, FactBase};

use std::fs;
use std::path::Path;

use crate::error::{Result, SheetStatsError};

/// Reads a fact-base JSON document produced by the stylesheet
/// fact-extraction collaborator.
///
/// Returns `Ok(None)` when the collaborator signalled "no facts" (a JSON
/// `null` or an empty document). A returned fact base is normalized so
/// every tracked property has at least an empty sequence.
///
/// # Errors
/// Returns an error if the file cannot be read or holds a malformed
/// document.
pub fn load_facts(path: &Path) -> Result<Option<FactBase>> {
    let content = fs::read_to_string(path).map_err(|source| SheetStatsError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_facts(&content).map_err(|source| SheetStatsError::FactsParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses a fact-base document from a JSON string.
///
/// # Errors
/// Returns the underlying JSON error for malformed documents.
pub fn parse_facts(content: &str) -> serde_json::Result<Option<FactBase>> {
    if content.trim().is_empty() {
        return Ok(None);
    }
    let facts: Option<FactBase> = serde_json::from_str(content)?;
    Ok(facts.map(FactBase::normalized))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
