//! Error types for envmatch

use thiserror::Error;

/// Main error type for envmatch operations.
///
/// Matching itself is total and never fails; the only error origin in this
/// crate is construction-time validation of a requirement.
#[derive(Debug, Error)]
pub enum EnvMatchError {
    /// A scalar range was declared with impossible bounds
    #[error("Invalid range: {0}")]
    InvalidRange(String),
}

/// Result type alias for envmatch operations
pub type Result<T> = std::result::Result<T, EnvMatchError>;
