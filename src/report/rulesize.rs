/// Declaration counts per style rule, rules without declarations skipped.
///
/// Empty rules are dropped, not zero-filled, so the series can be shorter
/// than the rule count.
#[must_use]
pub fn build_rulesize_series(rule_declaration_counts: &[usize]) -> Vec<usize> {
    rule_declaration_counts
        .iter()
        .copied()
        .filter(|&count| count > 0)
        .collect()
}

#[cfg(test)]
#[path = "rulesize_tests.rs"]
mod tests;
