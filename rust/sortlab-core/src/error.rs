//! Errors raised by the core crate.

use thiserror::Error;

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum SortError {
    /// The generator was asked for values in an empty range.
    #[error("invalid range: low bound {low} is greater than high bound {high}")]
    InvalidRange { low: i32, high: i32 },
}
