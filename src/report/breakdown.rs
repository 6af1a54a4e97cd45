use serde::Serialize;

use crate::facts::FactBase;

/// Default share threshold (percent) below which a property folds into
/// the trailing "other" bucket.
pub const LONG_TAIL_THRESHOLD: f64 = 2.0;

/// One slice of the property-usage breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownEntry {
    pub property: String,
    pub percentage: f64,
    /// Percentage fixed to two decimals for display.
    pub percentage_pretty: String,
}

/// Computes each distinct property's share of all declarations, merging
/// shares below `threshold` into a trailing "other" bucket.
///
/// Returns `None` when the fact base is absent, when there are no
/// declarations, when no property occurs, or when every share falls
/// under the threshold — a bare "other" bucket is never reported alone.
/// Kept entries sort by share descending (stable); "other" is always the
/// last entry regardless of its magnitude.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn compute_breakdown(facts: Option<&FactBase>, threshold: f64) -> Option<Vec<BreakdownEntry>> {
    let facts = facts?;
    let total = facts.all_declarations.len();
    if total == 0 || facts.distinct_properties_used.is_empty() {
        return None;
    }

    let mut kept: Vec<(String, f64)> = Vec::new();
    let mut other_sum = 0.0;
    for property in &facts.distinct_properties_used {
        let count = facts.declarations_by_property[property].len();
        let percentage = count as f64 / total as f64 * 100.0;
        if percentage < threshold {
            other_sum += percentage;
        } else {
            kept.push((property.clone(), percentage));
        }
    }

    if kept.is_empty() {
        return None;
    }

    kept.sort_by(|a, b| b.1.total_cmp(&a.1));
    kept.push(("other".to_string(), other_sum));

    Some(
        kept.into_iter()
            .map(|(property, percentage)| BreakdownEntry {
                property,
                percentage,
                percentage_pretty: format!("{percentage:.2}"),
            })
            .collect(),
    )
}

#[cfg(test)]
#[path = "breakdown_tests.rs"]
mod tests;
