//! Errors returned by the checked operations
//!
//! The expression engine itself never fails:
//! arithmetic follows IEEE semantics and compile-time indices are checked at build time.
//! Only operations taking runtime input return [Result].

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("component index {index} is out of range for a vector of size {size}")]
    IndexOutOfRange { index: usize, size: usize },

    #[error("expected {expected} components, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("no component with that name in this coordinate system")]
    UnknownComponent,

    /// The operation needs a vector with non-zero, finite length
    #[error("vector has zero or non-finite length")]
    DegenerateVector,
}

pub type Result<T> = core::result::Result<T, Error>;
