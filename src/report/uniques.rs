use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

use crate::facts::{DeclarationMetrics, FactBase};
use crate::fontsize::FontSizeNormalizer;

use super::properties::UNIQUE_PROPERTIES;

/// Deduplicated value sets for the tracked property set and font metrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Uniques {
    /// Distinct values per property, first occurrence first.
    #[serde(flatten)]
    pub properties: IndexMap<String, Vec<String>>,
    pub font_size: Vec<String>,
    pub font_family: Vec<String>,
    /// Distinct font sizes, largest pixel magnitude first.
    pub font_size_sorted: Vec<String>,
}

/// Deduplicates values for every property in [`UNIQUE_PROPERTIES`].
///
/// Returns `None` iff the fact base is absent. Dedup preserves
/// first-occurrence order; only `font_size_sorted` is re-sorted.
#[must_use]
pub fn compute_uniques(facts: Option<&FactBase>) -> Option<Uniques> {
    let facts = facts?;
    let properties = UNIQUE_PROPERTIES
        .iter()
        .map(|&property| {
            (
                property.to_string(),
                unique_in_order(&facts.property_values[property]),
            )
        })
        .collect();

    let font_size = unique_in_order(facts.all_font_sizes());
    let font_size_sorted = sort_font_sizes(font_size.clone());

    Some(Uniques {
        properties,
        font_size,
        font_family: unique_in_order(facts.all_font_families()),
        font_size_sorted,
    })
}

/// Deduplicates a value sequence, keeping the first occurrence of each
/// value in place.
pub(crate) fn unique_in_order(values: &[String]) -> Vec<String> {
    values
        .iter()
        .collect::<IndexSet<_>>()
        .into_iter()
        .cloned()
        .collect()
}

/// Sorts font-size tokens by descending pixel magnitude, stable on ties.
///
/// `total_cmp` keeps NaN magnitudes (unit suffix with a non-numeric
/// prefix) ordering deterministically instead of panicking.
fn sort_font_sizes(mut sizes: Vec<String>) -> Vec<String> {
    let normalizer = FontSizeNormalizer::new();
    sizes.sort_by(|a, b| normalizer.to_pixels(b).total_cmp(&normalizer.to_pixels(a)));
    sizes
}

#[cfg(test)]
#[path = "uniques_tests.rs"]
mod tests;
