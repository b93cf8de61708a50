//! Rotation Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};

/// A rotation error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for rotation operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Precondition failures when constructing a rotation.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// There is nothing to rotate through.
    #[display("cannot rotate through an empty catalog")]
    EmptyCatalog,
    /// An injected ordering is not a permutation of the entries.
    #[display("ordering is not a permutation of {_0} entries")]
    InvalidPermutation(#[error(not(source))] usize),
    /// The tick period must be non-zero.
    #[display("rotation interval must be greater than zero")]
    InvalidInterval,
    /// The ticker was started outside a tokio runtime.
    #[display("rotation ticker requires a running tokio runtime")]
    NoRuntime,
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        false
    }
}
