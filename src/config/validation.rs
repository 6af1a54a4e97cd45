//! Configuration semantic validation.

use std::str::FromStr;

use crate::output::OutputFormat;
use crate::{Result, SheetStatsError};

use super::Config;

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error if `breakdown.threshold` is out of range or
/// `output.format` names an unknown format.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    if !(0.0..=100.0).contains(&config.breakdown.threshold) {
        return Err(SheetStatsError::Config(format!(
            "breakdown.threshold must be between 0.0 and 100.0, got {}",
            config.breakdown.threshold
        )));
    }

    if let Some(ref format) = config.output.format
        && OutputFormat::from_str(format).is_err()
    {
        return Err(SheetStatsError::Config(format!(
            "output.format must be \"json\" or \"text\", got \"{format}\""
        )));
    }

    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
