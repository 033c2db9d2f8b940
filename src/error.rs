use std::num::ParseIntError;
use thiserror::Error;

/// An error raised while reading an [`Inventory`] from text.
///
/// Line numbers start at 1; a single `label=count` pair is reported as line 1.
///
/// [`Inventory`]: crate::Inventory
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The line names a bead color but gives no quantity for it.
    #[error("line {line}: missing bead count")]
    MissingCount { line: usize },
    /// The quantity is not a non-negative integer.
    #[error("line {line}: invalid bead count {count:?}")]
    InvalidCount {
        line: usize,
        count: String,
        #[source]
        source: ParseIntError,
    },
    /// The line gives a quantity but no bead color.
    #[error("line {line}: missing bead color")]
    EmptyLabel { line: usize },
}

/// A specialized [`Result`](std::result::Result) type for inventory parsing.
pub type Result<T> = std::result::Result<T, Error>;
