use indexmap::IndexSet;

use super::FactBase;

/// Declaration-level metrics the aggregation pipeline needs from its fact
/// source.
///
/// An explicit capability surface for the fact-extraction collaborator;
/// any fact source implementing it can feed the aggregators.
pub trait DeclarationMetrics {
    /// Every font-size token, repeats preserved.
    fn all_font_sizes(&self) -> &[String];

    /// Every font-family token, repeats preserved.
    fn all_font_families(&self) -> &[String];

    /// Number of distinct values observed for a property.
    fn unique_property_count(&self, property: &str) -> usize;
}

impl DeclarationMetrics for FactBase {
    fn all_font_sizes(&self) -> &[String] {
        &self.font_size_tokens
    }

    fn all_font_families(&self) -> &[String] {
        &self.font_family_tokens
    }

    fn unique_property_count(&self, property: &str) -> usize {
        self.property_values
            .get(property)
            .map_or(0, |values| values.iter().collect::<IndexSet<_>>().len())
    }
}
