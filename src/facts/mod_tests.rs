use std::path::Path;

use crate::error::SheetStatsError;

use super::{DeclarationMetrics, FactBase, load_facts, parse_facts};

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn a_json_null_signals_no_facts() {
    assert!(parse_facts("null").unwrap().is_none());
}

#[test]
fn an_empty_document_signals_no_facts() {
    assert!(parse_facts("").unwrap().is_none());
    assert!(parse_facts("  \n").unwrap().is_none());
}

#[test]
fn camel_case_wire_names_deserialize() {
    let facts = parse_facts(
        r#"{
            "propertyValues": {"color": ["red", "blue"]},
            "fontSizeTokens": ["16px"],
            "selectorSpecificities": [1, 10],
            "ruleDeclarationCounts": [2, 0]
        }"#,
    )
    .unwrap()
    .unwrap();

    assert_eq!(facts.property_values["color"], vec!["red", "blue"]);
    assert_eq!(facts.font_size_tokens, vec!["16px"]);
    assert_eq!(facts.selector_specificities, vec![1, 10]);
    assert_eq!(facts.rule_declaration_counts, vec![2, 0]);
}

#[test]
fn parsed_facts_come_back_normalized() {
    let facts = parse_facts(r#"{"propertyValues": {}}"#).unwrap().unwrap();
    assert!(facts.property_values.contains_key("border-radius"));
    assert!(facts.declarations_by_property.contains_key("float"));
}

#[test]
fn malformed_documents_are_an_error() {
    assert!(parse_facts("{not json").is_err());
}

#[test]
fn missing_files_report_the_path() {
    let err = load_facts(Path::new("does-not-exist.json")).unwrap_err();
    match err {
        SheetStatsError::FileRead { path, .. } => {
            assert_eq!(path, Path::new("does-not-exist.json"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

// ============================================================================
// Declaration metrics
// ============================================================================

#[test]
fn unique_property_count_ignores_repeats() {
    let facts = parse_facts(r#"{"propertyValues": {"color": ["red", "blue", "red"]}}"#)
        .unwrap()
        .unwrap();
    assert_eq!(facts.unique_property_count("color"), 2);
}

#[test]
fn unique_property_count_is_zero_for_unseen_properties() {
    let facts = FactBase::default();
    assert_eq!(facts.unique_property_count("display"), 0);
}

#[test]
fn font_metrics_expose_the_raw_token_sequences() {
    let facts = parse_facts(
        r#"{"fontSizeTokens": ["16px", "16px"], "fontFamilyTokens": ["serif"]}"#,
    )
    .unwrap()
    .unwrap();
    assert_eq!(facts.all_font_sizes().len(), 2);
    assert_eq!(facts.all_font_families(), ["serif".to_string()]);
}
