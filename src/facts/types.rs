use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::report::properties;

/// One `property: value` pair within a style rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

/// Parsed-stylesheet facts produced by the external fact-extraction
/// collaborator.
///
/// Sequences are in source order. The order of `distinct_properties_used`
/// is whatever the collaborator defines — arbitrary, but stable within one
/// run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FactBase {
    /// Raw value tokens per property, one entry per occurrence.
    pub property_values: IndexMap<String, Vec<String>>,

    /// Every declaration in the stylesheet (consumed only for its count).
    pub all_declarations: Vec<Declaration>,

    /// Declarations grouped by property.
    pub declarations_by_property: IndexMap<String, Vec<Declaration>>,

    /// Every property occurring at least once.
    pub distinct_properties_used: Vec<String>,

    /// One token per font-size declaration, repeats preserved.
    pub font_size_tokens: Vec<String>,

    /// One token per font-family declaration, repeats preserved.
    pub font_family_tokens: Vec<String>,

    /// Per-selector specificity scores, passed through to the report.
    pub selector_specificities: Vec<u32>,

    /// Declaration count per style rule.
    pub rule_declaration_counts: Vec<usize>,

    pub media_query_values: Vec<String>,
}

impl FactBase {
    /// Guarantees an entry for every property the aggregation sets track.
    ///
    /// Aggregators index `property_values` and `declarations_by_property`
    /// directly; a tracked property still missing after this step is a
    /// broken collaborator contract and fails fast.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        for property in properties::tracked() {
            if !self.property_values.contains_key(property) {
                self.property_values.insert(property.to_string(), Vec::new());
            }
            if !self.declarations_by_property.contains_key(property) {
                self.declarations_by_property
                    .insert(property.to_string(), Vec::new());
            }
        }
        self
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
