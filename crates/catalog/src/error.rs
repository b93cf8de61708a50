//! Catalog Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};
use std::path::PathBuf;

/// A catalog error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Library content could not be read from disk.
    #[display("unable to read library content: {}", _0.display())]
    Io(#[error(not(source))] PathBuf),
    /// The document does not open with a `---` delimited front matter block.
    #[display("missing or unterminated front matter")]
    FrontMatter,
    /// The front matter is valid YAML but does not describe a library.
    #[display("front matter does not describe a library record")]
    Parse,
    /// A library file failed to load; the cause is attached as a child.
    #[display("invalid library file: {}", _0.display())]
    InvalidFile(#[error(not(source))] PathBuf),
    /// A record does not pair exactly one foreign language with Rust.
    #[display("library \"{title}\" must pair exactly one foreign language with Rust")]
    Direction {
        /// Title of the offending record.
        title: String,
    },
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}
