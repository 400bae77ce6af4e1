//! SetSpace - allow-list / deny-list membership

use std::collections::HashSet;
use std::hash::Hash;

use super::Supports;

/// An allow-list or deny-list over values of `T`.
///
/// An absent set matches everything, in both modes. A scalar candidate is
/// accepted when its membership agrees with the mode. A sequence candidate
/// is asymmetric by design: allow mode requires every element to be in the
/// set, deny mode requires no element to be in the set. Both collapse to
/// the scalar rule for a one-element sequence.
///
/// # Examples
///
/// ```
/// use envmatch_core::space::{SetSpace, Supports};
///
/// let allowed = SetSpace::allow(["aa", "bb"]);
/// assert!(allowed.is_supported(&"aa"));
/// assert!(allowed.is_supported(["aa", "bb"].as_slice()));
/// assert!(!allowed.is_supported(["aa", "cc"].as_slice()));
///
/// let denied = SetSpace::deny(["aa", "bb"]);
/// assert!(denied.is_supported(&"cc"));
/// assert!(!denied.is_supported(["aa", "cc"].as_slice()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct SetSpace<T: Eq + Hash> {
    set: Option<HashSet<T>>,
    is_allow_set: bool,
}

impl<T: Eq + Hash> SetSpace<T> {
    /// Creates a space that matches any candidate.
    pub fn any() -> Self {
        SetSpace {
            set: None,
            is_allow_set: false,
        }
    }

    /// Creates an allow-list: only the given values are acceptable.
    pub fn allow<I: IntoIterator<Item = T>>(values: I) -> Self {
        SetSpace {
            set: Some(values.into_iter().collect()),
            is_allow_set: true,
        }
    }

    /// Creates a deny-list: the given values are forbidden.
    pub fn deny<I: IntoIterator<Item = T>>(values: I) -> Self {
        SetSpace {
            set: Some(values.into_iter().collect()),
            is_allow_set: false,
        }
    }

    /// Returns the configured set, if any.
    pub fn set(&self) -> Option<&HashSet<T>> {
        self.set.as_ref()
    }

    /// Returns true in allow-list mode.
    #[inline]
    pub const fn is_allow_set(&self) -> bool {
        self.is_allow_set
    }
}

impl<T: Eq + Hash> Default for SetSpace<T> {
    fn default() -> Self {
        SetSpace::any()
    }
}

impl<T: Eq + Hash> Supports<T> for SetSpace<T> {
    fn is_supported(&self, candidate: &T) -> bool {
        match &self.set {
            Some(set) => set.contains(candidate) == self.is_allow_set,
            None => true,
        }
    }
}

impl<T: Eq + Hash> Supports<[T]> for SetSpace<T> {
    fn is_supported(&self, candidates: &[T]) -> bool {
        match &self.set {
            Some(set) if self.is_allow_set => candidates.iter().all(|value| set.contains(value)),
            Some(set) => !candidates.iter().any(|value| set.contains(value)),
            None => true,
        }
    }
}
