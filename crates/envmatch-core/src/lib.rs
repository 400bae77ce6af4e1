//! envmatch Core - Capability matching for test-environment selection
//!
//! This crate decides whether a concrete, discovered environment satisfies
//! a test case's declared requirement. It provides:
//! - A space algebra: scalar ranges, set membership, list containers
//! - Requirement types composing spaces over node descriptions
//! - The candidate-side data contract produced by platform discovery
//!
//! Everything is an immutable value object; evaluation is a pure boolean
//! function with no I/O, so requirements can be checked concurrently
//! against many candidate environments without synchronization.
//!
//! # Example
//!
//! ```
//! use envmatch_core::space::IntRange;
//! use envmatch_core::{simple, NodeDescription, NodeRequirement};
//!
//! let requirement = simple(
//!     1,
//!     Some(NodeRequirement::new().with_core_count(IntRange::bounded(4, 8).unwrap())),
//!     None,
//! );
//!
//! let pool = vec![NodeDescription::new().with_core_count(6)];
//! assert!(requirement.supports_environment(&pool));
//! ```

pub mod error;
pub mod requirement;
pub mod schema;
pub mod space;

#[cfg(test)]
mod requirement_tests;

pub use error::{EnvMatchError, Result};
pub use requirement::{simple, EnvironmentRequirement, NodeRequirement, Requirement};
pub use schema::{FeatureId, NodeDescription, PlatformId};
pub use space::{IntRange, IntSpace, ListSpace, SetSpace, Supports};
