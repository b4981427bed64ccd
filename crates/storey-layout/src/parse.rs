//! Free-text level-height parsing with silent defaulting.
//!
//! The tokenizer never fails. Empty tokens are dropped, unparseable or
//! non-finite tokens become the default magnitude, and input with no
//! tokens at all yields a single default height so that level
//! generation always receives at least one entry.

use smallvec::SmallVec;
use storey_core::{LinearValue, UnitConversion};

use crate::config::LayoutConfig;

/// Split `text` on any of `separators` and parse each token as a height.
///
/// # Examples
///
/// ```
/// use storey_core::{LinearUnit, UnitConversion};
/// use storey_layout::parse_level_heights;
///
/// let m = UnitConversion::identity(LinearUnit::Meters);
/// let heights = parse_level_heights("3,x;5", &[',', ';'], 4.0, m);
/// let magnitudes: Vec<f64> = heights.iter().map(|h| h.magnitude()).collect();
/// assert_eq!(magnitudes, vec![3.0, 4.0, 5.0]);
/// ```
pub fn parse_level_heights(
    text: &str,
    separators: &[char],
    default_magnitude: f64,
    units: UnitConversion,
) -> Vec<LinearValue> {
    let mut magnitudes: Vec<f64> = text
        .split(|c: char| separators.contains(&c))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            parse_magnitude(token).unwrap_or_else(|| {
                tracing::trace!(token, default_magnitude, "substituting default height");
                default_magnitude
            })
        })
        .collect();
    if magnitudes.is_empty() {
        magnitudes.push(default_magnitude);
    }
    magnitudes.into_iter().map(|h| units.linear(h)).collect()
}

/// Parse a finite `f64`, rejecting `NaN` and infinities.
pub(crate) fn parse_magnitude(token: &str) -> Option<f64> {
    token.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// A configured [`parse_level_heights`].
#[derive(Clone, Debug, PartialEq)]
pub struct HeightParser {
    separators: SmallVec<[char; 4]>,
    default_magnitude: f64,
    units: UnitConversion,
}

impl HeightParser {
    /// Build a parser with explicit settings.
    pub fn new(
        separators: impl IntoIterator<Item = char>,
        default_magnitude: f64,
        units: UnitConversion,
    ) -> Self {
        Self {
            separators: separators.into_iter().collect(),
            default_magnitude,
            units,
        }
    }

    /// Build a parser from the tokenizer settings in `config`.
    pub fn from_config(config: &LayoutConfig) -> Self {
        Self::new(
            config.separators.iter().copied(),
            config.default_height,
            config.units,
        )
    }

    /// The magnitude substituted for unparseable input.
    pub fn default_magnitude(&self) -> f64 {
        self.default_magnitude
    }

    /// Parse `text` into heights. Never fails and never returns empty.
    pub fn parse(&self, text: &str) -> Vec<LinearValue> {
        parse_level_heights(text, &self.separators, self.default_magnitude, self.units)
    }
}

impl Default for HeightParser {
    fn default() -> Self {
        Self::from_config(&LayoutConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use storey_core::LinearUnit;

    fn parser() -> HeightParser {
        HeightParser::new(
            [',', ';', ' '],
            3.0,
            UnitConversion::identity(LinearUnit::Meters),
        )
    }

    fn magnitudes(values: &[LinearValue]) -> Vec<f64> {
        values.iter().map(|v| v.magnitude()).collect()
    }

    #[test]
    fn empty_input_yields_single_default() {
        assert_eq!(magnitudes(&parser().parse("")), vec![3.0]);
    }

    #[test]
    fn whitespace_only_input_yields_single_default() {
        assert_eq!(magnitudes(&parser().parse("   \t ")), vec![3.0]);
    }

    #[test]
    fn separators_only_input_yields_single_default() {
        assert_eq!(magnitudes(&parser().parse(",;, ,")), vec![3.0]);
    }

    #[test]
    fn mixed_separators() {
        assert_eq!(magnitudes(&parser().parse("3,4;5 6")), vec![3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn unparseable_token_becomes_default() {
        let p = HeightParser::new([','], 2.5, UnitConversion::identity(LinearUnit::Meters));
        assert_eq!(magnitudes(&p.parse("3,x,5")), vec![3.0, 2.5, 5.0]);
    }

    #[test]
    fn repeated_separators_are_collapsed() {
        assert_eq!(magnitudes(&parser().parse("4,,;  4.5")), vec![4.0, 4.5]);
    }

    #[test]
    fn non_finite_tokens_become_default() {
        assert_eq!(
            magnitudes(&parser().parse("NaN,inf,-inf,2")),
            vec![3.0, 3.0, 3.0, 2.0]
        );
    }

    #[test]
    fn tokens_are_trimmed_with_unlisted_whitespace() {
        let p = HeightParser::new([','], 3.0, UnitConversion::identity(LinearUnit::Meters));
        assert_eq!(magnitudes(&p.parse(" 4 ,\t5\n")), vec![4.0, 5.0]);
    }

    #[test]
    fn heights_are_converted_to_internal_units() {
        let p = HeightParser::new(
            [','],
            3.0,
            UnitConversion::new(LinearUnit::Meters, LinearUnit::Millimeters),
        );
        let internal: Vec<f64> = p.parse("3.5,x").iter().map(|v| v.internal()).collect();
        assert_eq!(internal, vec![3500.0, 3000.0]);
    }

    #[test]
    fn default_parser_splits_on_tabs() {
        let heights = HeightParser::default().parse("3\t4");
        assert_eq!(magnitudes(&heights), vec![3.0, 4.0]);
    }

    proptest! {
        #[test]
        fn never_empty(text in ".*") {
            prop_assert!(!parser().parse(&text).is_empty());
        }

        #[test]
        fn joined_numbers_roundtrip(values in prop::collection::vec(0u32..10_000, 1..20)) {
            let text = values.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(";");
            let parsed = magnitudes(&parser().parse(&text));
            let expected: Vec<f64> = values.iter().map(|&v| f64::from(v)).collect();
            prop_assert_eq!(parsed, expected);
        }
    }
}
