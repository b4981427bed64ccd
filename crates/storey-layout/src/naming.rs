//! Grid naming schemes.

use serde::{Deserialize, Serialize};

/// How grid names are derived from their 1-based position along an axis.
///
/// Every scheme is injective over the ordinal, so names on one axis are
/// always pairwise distinct.
///
/// # Examples
///
/// ```
/// use storey_layout::GridNaming;
///
/// assert_eq!(GridNaming::Prefixed("X".into()).label(0), "X1");
/// assert_eq!(GridNaming::Numeric.label(9), "10");
/// assert_eq!(GridNaming::Alphabetic.label(26), "AA");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GridNaming {
    /// `"{prefix}{n}"`, e.g. `X1, X2, ...`.
    Prefixed(String),
    /// `"{n}"`: `1, 2, 3, ...`.
    Numeric,
    /// Bijective base-26 letters: `A..Z, AA, AB, ...`.
    Alphabetic,
}

impl GridNaming {
    /// Name for the grid at 0-based `ordinal`.
    pub fn label(&self, ordinal: usize) -> String {
        let n = ordinal + 1;
        match self {
            Self::Prefixed(prefix) => format!("{prefix}{n}"),
            Self::Numeric => n.to_string(),
            Self::Alphabetic => alphabetic(n),
        }
    }

    /// Whether some label of `self` equals some label of `other`.
    ///
    /// Numbered schemes collide when one prefix extends the other by
    /// digits without a leading zero: `X` and `X1` share `X11`.
    pub(crate) fn overlaps(&self, other: &Self) -> bool {
        match (self.number_prefix(), other.number_prefix()) {
            (Some(a), Some(b)) => {
                let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
                long.strip_prefix(short).is_some_and(|rest| {
                    rest.is_empty()
                        || (!rest.starts_with('0') && rest.bytes().all(|c| c.is_ascii_digit()))
                })
            }
            (None, None) => true,
            // Letters never end in a digit.
            _ => false,
        }
    }

    /// Text before the number, or `None` for letter labels.
    fn number_prefix(&self) -> Option<&str> {
        match self {
            Self::Prefixed(prefix) => Some(prefix),
            Self::Numeric => Some(""),
            Self::Alphabetic => None,
        }
    }
}

/// Spreadsheet-column lettering for `n >= 1`.
fn alphabetic(mut n: usize) -> String {
    let mut letters = Vec::new();
    while n > 0 {
        n -= 1;
        letters.push(b'A' + (n % 26) as u8);
        n /= 26;
    }
    letters.reverse();
    letters.into_iter().map(char::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn alphabetic_boundaries() {
        let s = GridNaming::Alphabetic;
        assert_eq!(s.label(0), "A");
        assert_eq!(s.label(25), "Z");
        assert_eq!(s.label(26), "AA");
        assert_eq!(s.label(51), "AZ");
        assert_eq!(s.label(52), "BA");
        assert_eq!(s.label(701), "ZZ");
        assert_eq!(s.label(702), "AAA");
    }

    fn prefixed(p: &str) -> GridNaming {
        GridNaming::Prefixed(p.to_string())
    }

    #[test]
    fn empty_prefix_overlaps_numeric() {
        assert!(prefixed("").overlaps(&GridNaming::Numeric));
        assert!(!prefixed("X").overlaps(&GridNaming::Numeric));
    }

    #[test]
    fn digit_extended_prefix_overlaps() {
        assert!(prefixed("X").overlaps(&prefixed("X1")));
        assert!(prefixed("X12").overlaps(&prefixed("X")));
        assert!(prefixed("7").overlaps(&GridNaming::Numeric));
        assert_eq!(prefixed("X").label(10), prefixed("X1").label(0));
    }

    #[test]
    fn non_colliding_prefixes() {
        assert!(!prefixed("X").overlaps(&prefixed("Y")));
        assert!(!prefixed("X").overlaps(&prefixed("X0")));
        assert!(!prefixed("X").overlaps(&prefixed("XA")));
        assert!(!prefixed("X").overlaps(&GridNaming::Alphabetic));
        assert!(GridNaming::Alphabetic.overlaps(&GridNaming::Alphabetic));
    }

    fn arb_naming() -> impl Strategy<Value = GridNaming> {
        prop_oneof![
            "[A-Za-z]{0,3}".prop_map(GridNaming::Prefixed),
            Just(GridNaming::Numeric),
            Just(GridNaming::Alphabetic),
        ]
    }

    proptest! {
        #[test]
        fn labels_are_unique(naming in arb_naming(), count in 0usize..1000) {
            let names: HashSet<String> = (0..count).map(|i| naming.label(i)).collect();
            prop_assert_eq!(names.len(), count);
        }

        #[test]
        fn disjoint_schemes_never_share_labels(
            a in "[XY0-9]{0,2}",
            b in "[XY0-9]{0,2}",
        ) {
            let (a, b) = (GridNaming::Prefixed(a), GridNaming::Prefixed(b));
            let left: HashSet<String> = (0..1000).map(|i| a.label(i)).collect();
            let shared = (0..1000).any(|i| left.contains(&b.label(i)));
            prop_assert_eq!(shared, a.overlaps(&b));
        }
    }
}
