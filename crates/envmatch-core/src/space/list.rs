//! ListSpace - cardinality-bounded list of sub-requirements

use super::{IntSpace, Supports};

/// A constraint over a sequence of candidates: a cardinality bound composed
/// with an item-wise predicate.
///
/// With no `items`, cardinality is the only constraint. With exactly one
/// item, that item is broadcast over every element. With more than one item,
/// matching is positional: element `i` must satisfy item `i`, and the
/// sequence length must equal the item count.
///
/// Quirk, kept deliberately: the broadcast mode is triggered solely by
/// `items.len() == 1`, even when `count_space` admits more than one
/// element. A single item therefore means "every node looks like this",
/// never "exactly one node". The minimum-count requirement builder relies
/// on this.
///
/// # Examples
///
/// ```
/// use envmatch_core::space::{IntRange, ListSpace, Supports};
///
/// // At least one element, every element between 4 and 8.
/// let space = ListSpace {
///     count_space: IntRange::at_least(1).into(),
///     items: Some(vec![IntRange::bounded(4, 8).unwrap()]),
/// };
/// assert!(space.is_supported([6, 6].as_slice()));
/// assert!(!space.is_supported([6, 10].as_slice()));
/// assert!(!space.is_supported([].as_slice()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct ListSpace<T> {
    /// Constraint on the number of elements.
    pub count_space: IntSpace,
    /// Item-wise predicates: absent, broadcast (one), or positional (many).
    pub items: Option<Vec<T>>,
}

impl<T> ListSpace<T> {
    /// Creates a space constraining only the element count.
    pub fn counted(count_space: impl Into<IntSpace>) -> Self {
        ListSpace {
            count_space: count_space.into(),
            items: None,
        }
    }

    /// Creates a space with a count constraint and item predicates.
    pub fn new(count_space: impl Into<IntSpace>, items: Vec<T>) -> Self {
        ListSpace {
            count_space: count_space.into(),
            items: Some(items),
        }
    }
}

// Manual impl: a derived Default would demand `T: Default`, but an
// unconstrained space carries no items at all.
impl<T> Default for ListSpace<T> {
    fn default() -> Self {
        ListSpace {
            count_space: IntSpace::default(),
            items: None,
        }
    }
}

impl<T, C> Supports<[C]> for ListSpace<T>
where
    T: Supports<C>,
{
    fn is_supported(&self, candidates: &[C]) -> bool {
        if !self.count_space.is_supported(&(candidates.len() as i64)) {
            return false;
        }
        match self.items.as_deref() {
            None => true,
            Some([item]) => candidates.iter().all(|candidate| item.is_supported(candidate)),
            // Positional: a fixed-length item list can reject a length the
            // count space accepted.
            Some(items) => {
                items.len() == candidates.len()
                    && items
                        .iter()
                        .zip(candidates)
                        .all(|(item, candidate)| item.is_supported(candidate))
            }
        }
    }
}
