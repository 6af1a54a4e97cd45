use crate::error::SheetStatsError;

use super::super::{BreakdownConfig, Config, OutputConfig, validate_config_semantics};

fn config_with_threshold(threshold: f64) -> Config {
    Config {
        breakdown: BreakdownConfig { threshold },
        ..Config::default()
    }
}

fn config_with_format(format: &str) -> Config {
    Config {
        output: OutputConfig {
            format: Some(format.to_string()),
        },
        ..Config::default()
    }
}

#[test]
fn the_default_config_is_valid() {
    assert!(validate_config_semantics(&Config::default()).is_ok());
}

#[test]
fn negative_thresholds_are_rejected() {
    assert!(matches!(
        validate_config_semantics(&config_with_threshold(-1.0)),
        Err(SheetStatsError::Config(_))
    ));
}

#[test]
fn thresholds_above_one_hundred_are_rejected() {
    assert!(matches!(
        validate_config_semantics(&config_with_threshold(100.5)),
        Err(SheetStatsError::Config(_))
    ));
}

#[test]
fn boundary_thresholds_are_accepted() {
    assert!(validate_config_semantics(&config_with_threshold(0.0)).is_ok());
    assert!(validate_config_semantics(&config_with_threshold(100.0)).is_ok());
}

#[test]
fn known_format_names_are_accepted() {
    assert!(validate_config_semantics(&config_with_format("text")).is_ok());
    assert!(validate_config_semantics(&config_with_format("json")).is_ok());
}

#[test]
fn unknown_format_names_are_rejected() {
    let err = validate_config_semantics(&config_with_format("yaml")).unwrap_err();
    assert!(err.to_string().contains("yaml"));
}
