//! IntRange - inclusive-or-exclusive numeric interval

use std::fmt;

use super::Supports;
use crate::error::{EnvMatchError, Result};

/// A validated integer interval with an inclusive lower bound and an
/// inclusive or exclusive upper bound.
///
/// The invariant `min <= max` is checked at construction, as is the
/// degenerate case `min == max` with an exclusive upper bound (an empty
/// range is never constructible). Evaluation can therefore never fail.
///
/// # Examples
///
/// ```
/// use envmatch_core::space::{IntRange, Supports};
///
/// let cores = IntRange::bounded(4, 8).unwrap();
/// assert!(cores.is_supported(&6));
/// assert!(cores.is_supported(&8));
/// assert!(!cores.is_supported(&10));
///
/// let below_eight = IntRange::new(4, 8, false).unwrap();
/// assert!(!below_eight.is_supported(&8));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct IntRange {
    min: i64,
    max: i64,
    max_inclusive: bool,
}

impl IntRange {
    /// Creates a new range.
    ///
    /// # Errors
    ///
    /// Returns [`EnvMatchError::InvalidRange`] when `min > max`, or when
    /// `min == max` with `max_inclusive` false.
    pub fn new(min: i64, max: i64, max_inclusive: bool) -> Result<Self> {
        if min > max {
            return Err(EnvMatchError::InvalidRange(format!(
                "min {min} is greater than max {max}"
            )));
        }
        if min == max && !max_inclusive {
            return Err(EnvMatchError::InvalidRange(format!(
                "min equals max {min} with an exclusive upper bound"
            )));
        }
        Ok(IntRange {
            min,
            max,
            max_inclusive,
        })
    }

    /// Creates a range with both bounds inclusive.
    pub fn bounded(min: i64, max: i64) -> Result<Self> {
        IntRange::new(min, max, true)
    }

    /// Creates a lower-bounded range reaching to the maximum representable
    /// value. Never fails.
    pub fn at_least(min: i64) -> Self {
        IntRange {
            min,
            max: i64::MAX,
            max_inclusive: true,
        }
    }

    /// Creates an upper-bounded range starting at zero.
    ///
    /// # Errors
    ///
    /// Returns [`EnvMatchError::InvalidRange`] when `max` is negative.
    pub fn at_most(max: i64) -> Result<Self> {
        IntRange::new(0, max, true)
    }

    /// Returns the inclusive lower bound.
    #[inline]
    pub const fn min(&self) -> i64 {
        self.min
    }

    /// Returns the upper bound.
    #[inline]
    pub const fn max(&self) -> i64 {
        self.max
    }

    /// Returns true if the upper bound is inclusive.
    #[inline]
    pub const fn max_inclusive(&self) -> bool {
        self.max_inclusive
    }
}

impl Supports<i64> for IntRange {
    #[inline]
    fn is_supported(&self, candidate: &i64) -> bool {
        let value = *candidate;
        value >= self.min && (value < self.max || (value == self.max && self.max_inclusive))
    }
}

impl fmt::Display for IntRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let close = if self.max_inclusive { ']' } else { ')' };
        write!(f, "[{}, {}{close}", self.min, self.max)
    }
}
