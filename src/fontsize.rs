use regex::Regex;

/// Pixel magnitude assigned to tokens the normalizer cannot interpret.
/// Sorts ahead of every real size in the descending `fontSizeSorted` order.
pub const UNKNOWN_SIZE_PX: f64 = 1024.0;

/// Keyword font sizes and their approximate pixel magnitudes.
const KEYWORD_SIZES: &[(&str, f64)] = &[
    ("inherit", 16.0),
    ("xx-small", 9.0),
    ("x-small", 10.0),
    ("small", 13.0),
    ("medium", 16.0),
    ("large", 18.0),
    ("x-large", 24.0),
    ("xx-large", 32.0),
    ("larger", 19.0),
];

/// Converts CSS font-size tokens into approximate pixel magnitudes.
///
/// The conversion exists for ordering only and is not rendering-accurate;
/// relative units assume a 16px root.
pub struct FontSizeNormalizer {
    number_pattern: Regex,
}

impl Default for FontSizeNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl FontSizeNormalizer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            number_pattern: Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)").expect("Invalid regex"),
        }
    }

    /// Approximate pixel magnitude for a font-size token.
    ///
    /// Checked in order: `px` suffix, `em` suffix, `%` suffix, keyword
    /// table, then the [`UNKNOWN_SIZE_PX`] sentinel. A unit suffix with a
    /// non-numeric prefix yields `NaN`; callers compare magnitudes with
    /// `f64::total_cmp` so such tokens still order deterministically.
    #[must_use]
    pub fn to_pixels(&self, token: &str) -> f64 {
        if token.ends_with("px") {
            return self.leading_number(token);
        }
        if token.ends_with("em") {
            return self.leading_number(token) * 16.0;
        }
        if token.ends_with('%') {
            return self.leading_number(token) * 0.16;
        }
        KEYWORD_SIZES
            .iter()
            .find(|(keyword, _)| *keyword == token)
            .map_or(UNKNOWN_SIZE_PX, |&(_, px)| px)
    }

    fn leading_number(&self, token: &str) -> f64 {
        self.number_pattern
            .find(token)
            .map_or(f64::NAN, |m| m.as_str().parse().unwrap_or(f64::NAN))
    }
}

#[cfg(test)]
#[path = "fontsize_tests.rs"]
mod tests;
