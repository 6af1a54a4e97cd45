mod breakdown;
mod graph;
pub mod properties;
mod rulesize;
mod totals;
mod uniques;

pub use breakdown::{BreakdownEntry, LONG_TAIL_THRESHOLD, compute_breakdown};
pub use graph::{UsageEntry, UsageGraph, build_uniques_graph};
pub use rulesize::build_rulesize_series;
pub use totals::{Totals, compute_totals};
pub use uniques::{Uniques, compute_uniques};

use serde::Serialize;

use crate::facts::FactBase;

use uniques::unique_in_order;

/// The dashboard-ready analytics report for one stylesheet.
///
/// Immutable once built. Aggregation fields are `None` when the fact base
/// was absent (serialized as `null`); `pretty_source` and `raw_fact_base`
/// are collaborator inputs passed through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub totals: Option<Totals>,
    pub uniques: Option<Uniques>,
    pub uniques_graph: Option<UsageGraph>,
    pub property_breakdown: Option<Vec<BreakdownEntry>>,
    pub specificity_graph: Option<Vec<u32>>,
    pub rulesize_graph: Option<Vec<usize>>,
    pub media_queries: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pretty_source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_fact_base: Option<FactBase>,
}

impl Report {
    /// True when the report was built without a fact base and every
    /// aggregation field is absent.
    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        self.raw_fact_base.is_none()
    }
}

/// Assembles a [`Report`] from the collaborator inputs.
///
/// Building never fails: an absent fact base degrades every aggregation
/// field to `None` instead of aborting the pipeline.
#[derive(Debug, Clone)]
pub struct ReportBuilder {
    facts: Option<FactBase>,
    pretty_source: Option<String>,
    breakdown_threshold: f64,
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self::new(None)
    }
}

impl ReportBuilder {
    #[must_use]
    pub fn new(facts: Option<FactBase>) -> Self {
        Self {
            facts,
            pretty_source: None,
            breakdown_threshold: LONG_TAIL_THRESHOLD,
        }
    }

    /// Attaches pretty-printed source text from the external formatter,
    /// passed through to the report unchanged.
    #[must_use]
    pub fn with_pretty_source(mut self, source: impl Into<String>) -> Self {
        self.pretty_source = Some(source.into());
        self
    }

    /// Overrides the long-tail merge threshold (percent).
    #[must_use]
    pub fn with_breakdown_threshold(mut self, threshold: f64) -> Self {
        self.breakdown_threshold = threshold;
        self
    }

    /// Runs every aggregation and assembles the report.
    #[must_use]
    pub fn build(self) -> Report {
        let facts = self.facts.as_ref();
        Report {
            totals: compute_totals(facts),
            uniques: compute_uniques(facts),
            uniques_graph: facts.map(build_uniques_graph),
            property_breakdown: compute_breakdown(facts, self.breakdown_threshold),
            specificity_graph: facts.map(|f| f.selector_specificities.clone()),
            rulesize_graph: facts.map(|f| build_rulesize_series(&f.rule_declaration_counts)),
            media_queries: facts.map(|f| unique_in_order(&f.media_query_values)),
            pretty_source: self.pretty_source,
            raw_fact_base: self.facts,
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
