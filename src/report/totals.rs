use indexmap::IndexMap;
use serde::Serialize;

use crate::facts::{DeclarationMetrics, FactBase};

use super::properties::TOTAL_PROPERTIES;

/// Occurrence counts for the counted property set, plus font-size and
/// distinct-property tallies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    /// Occurrences per property, keyed by property name.
    #[serde(flatten)]
    pub properties: IndexMap<String, usize>,
    pub font_size_count: usize,
    pub total_distinct_properties: usize,
}

/// Counts occurrences for every property in [`TOTAL_PROPERTIES`].
///
/// Returns `None` iff the fact base is absent. Counted properties are
/// guaranteed present by fact-base normalization; indexing panics on a
/// broken collaborator contract rather than masking it with a zero.
#[must_use]
pub fn compute_totals(facts: Option<&FactBase>) -> Option<Totals> {
    let facts = facts?;
    let properties = TOTAL_PROPERTIES
        .iter()
        .map(|&property| (property.to_string(), facts.property_values[property].len()))
        .collect();

    Some(Totals {
        properties,
        font_size_count: facts.all_font_sizes().len(),
        total_distinct_properties: facts.distinct_properties_used.len(),
    })
}

#[cfg(test)]
#[path = "totals_tests.rs"]
mod tests;
