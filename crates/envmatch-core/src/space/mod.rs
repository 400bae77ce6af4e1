//! Capability spaces - the predicate algebra of the matching engine
//!
//! A capability space is an immutable predicate over some candidate shape:
//! a numeric interval, a tagged scalar union, an allow/deny set, or a
//! cardinality-bounded list of sub-requirements. All spaces answer the same
//! question through [`Supports`] and never fail during evaluation.

mod int;
mod list;
mod range;
mod set;


pub use int::IntSpace;
pub use list::ListSpace;
pub use range::IntRange;
pub use set::SetSpace;

/// Core trait for all capability spaces.
///
/// `C` is the candidate shape the space is evaluated against: a scalar for
/// ranges, a slice for list spaces, a concrete node description for node
/// requirements. Implementations must be pure: no I/O, no mutation, a
/// deterministic boolean for every input.
pub trait Supports<C: ?Sized> {
    /// Returns true if the candidate satisfies this space.
    fn is_supported(&self, candidate: &C) -> bool;
}

/// Evaluates an optional space, treating an absent space as "supports all".
///
/// Requirements leave most fields unconstrained; an unset sub-space must not
/// reject any candidate.
///
/// # Examples
///
/// ```
/// use envmatch_core::space::{supports_opt, IntRange};
///
/// let range = IntRange::at_least(4);
/// assert!(supports_opt(Some(&range), &6));
/// assert!(!supports_opt(Some(&range), &2));
/// assert!(supports_opt(None::<&IntRange>, &2));
/// ```
pub fn supports_opt<S, C>(space: Option<&S>, candidate: &C) -> bool
where
    S: Supports<C>,
    C: ?Sized,
{
    match space {
        Some(space) => space.is_supported(candidate),
        None => true,
    }
}
