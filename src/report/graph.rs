use indexmap::IndexMap;
use serde::Serialize;

use crate::facts::{DeclarationMetrics, FactBase};

use super::properties::GRAPH_PROPERTIES;

/// One bar of the totals/uniques chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageEntry {
    pub total: usize,
    pub unique: usize,
    /// `total / max`, a 0..1 bar length. `NaN` when no charted property
    /// occurs; renderers must guard.
    pub percent_total: f64,
    /// `unique / max`, same scale and caveat as `percent_total`.
    pub percent_unique: f64,
}

/// Normalized total/unique series for the charted property set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UsageGraph {
    /// Largest per-property total across the set.
    pub max: usize,
    /// Bars keyed by property name, in [`GRAPH_PROPERTIES`] order.
    #[serde(flatten)]
    pub properties: IndexMap<String, UsageEntry>,
}

/// Builds the chart series for every property in [`GRAPH_PROPERTIES`].
///
/// A property with no entries charts as zero counts. Every property gets
/// its own percentages from a binding scoped to its own iteration.
#[must_use]
#[allow(clippy::cast_precision_loss)] // chart magnitudes, exact integers not required
pub fn build_uniques_graph(facts: &FactBase) -> UsageGraph {
    let counts: Vec<(&str, usize, usize)> = GRAPH_PROPERTIES
        .iter()
        .map(|&property| {
            let total = facts.property_values.get(property).map_or(0, Vec::len);
            let unique = facts.unique_property_count(property);
            (property, total, unique)
        })
        .collect();

    let max = counts.iter().map(|&(_, total, _)| total).max().unwrap_or(0);

    let properties = counts
        .into_iter()
        .map(|(property, total, unique)| {
            let entry = UsageEntry {
                total,
                unique,
                percent_total: total as f64 / max as f64,
                percent_unique: unique as f64 / max as f64,
            };
            (property.to_string(), entry)
        })
        .collect();

    UsageGraph { max, properties }
}

#[cfg(test)]
#[path = "graph_tests.rs"]
mod tests;
