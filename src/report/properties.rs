//! Property sets driving the aggregations.
//!
//! Each aggregation iterates one declared constant; membership and order
//! are fixed here and nowhere else.

use indexmap::IndexSet;

/// Properties counted by the totals aggregation.
pub const TOTAL_PROPERTIES: &[&str] = &["float", "width", "height", "color", "background-color"];

/// Properties reported as deduplicated value sets.
pub const UNIQUE_PROPERTIES: &[&str] = &[
    "width",
    "height",
    "color",
    "background-color",
    "margin",
    "padding",
    "border-radius",
];

/// Properties charted as normalized total/unique bars.
pub const GRAPH_PROPERTIES: &[&str] = &[
    "width",
    "height",
    "margin",
    "padding",
    "color",
    "background-color",
];

/// Every property at least one aggregation references.
///
/// Fact-base normalization guarantees an entry for each of these.
#[must_use]
pub fn tracked() -> IndexSet<&'static str> {
    TOTAL_PROPERTIES
        .iter()
        .chain(UNIQUE_PROPERTIES)
        .chain(GRAPH_PROPERTIES)
        .copied()
        .collect()
}

#[cfg(test)]
#[path = "properties_tests.rs"]
mod tests;
