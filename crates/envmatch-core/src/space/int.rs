//! IntSpace - tagged union of scalar constraints

use super::{IntRange, Supports};

/// A scalar constraint: unconstrained, an exact value, a single range, or
/// an ordered list of ranges combined with logical OR.
///
/// # Examples
///
/// ```
/// use envmatch_core::space::{IntRange, IntSpace, Supports};
///
/// let any = IntSpace::Unconstrained;
/// assert!(any.is_supported(&0));
///
/// let exact = IntSpace::from(4);
/// assert!(exact.is_supported(&4));
/// assert!(!exact.is_supported(&5));
///
/// let split = IntSpace::Ranges(vec![
///     IntRange::bounded(10, 15).unwrap(),
///     IntRange::bounded(20, 80).unwrap(),
/// ]);
/// assert!(split.is_supported(&25));
/// assert!(!split.is_supported(&18));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum IntSpace {
    /// Any value is acceptable.
    #[default]
    Unconstrained,
    /// Only this exact value is acceptable.
    Exact(i64),
    /// Values inside a single interval are acceptable.
    Range(IntRange),
    /// Values inside any of the intervals are acceptable.
    Ranges(Vec<IntRange>),
}

impl Supports<i64> for IntSpace {
    fn is_supported(&self, candidate: &i64) -> bool {
        match self {
            IntSpace::Unconstrained => true,
            IntSpace::Exact(expected) => candidate == expected,
            IntSpace::Range(range) => range.is_supported(candidate),
            // First match wins.
            IntSpace::Ranges(ranges) => ranges.iter().any(|range| range.is_supported(candidate)),
        }
    }
}

impl From<i64> for IntSpace {
    fn from(value: i64) -> Self {
        IntSpace::Exact(value)
    }
}

impl From<IntRange> for IntSpace {
    fn from(range: IntRange) -> Self {
        IntSpace::Range(range)
    }
}

impl From<Vec<IntRange>> for IntSpace {
    fn from(ranges: Vec<IntRange>) -> Self {
        IntSpace::Ranges(ranges)
    }
}
