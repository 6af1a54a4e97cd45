use serde::{Deserialize, Serialize};

use crate::report::LONG_TAIL_THRESHOLD;

/// Breakdown configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BreakdownConfig {
    /// Share threshold (percent) under which properties merge into "other".
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

impl Default for BreakdownConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
        }
    }
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct OutputConfig {
    /// Default output format ("json" or "text").
    #[serde(default)]
    pub format: Option<String>,
}

/// Root configuration model for `.sheetstats.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub breakdown: BreakdownConfig,
    pub output: OutputConfig,
}

const fn default_threshold() -> f64 {
    LONG_TAIL_THRESHOLD
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
