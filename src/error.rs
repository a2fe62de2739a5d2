use std::error::Error;
use std::fmt::{Display, Formatter, Result};

/// Error type for the checked sorting entry points.
///
/// Sorting itself never fails: every variant is raised before any element is moved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// The sequence holds an element that cannot be ordered, e.g. a floating point `NaN`.
    InvalidInput(String),

    /// A range bound passed to a range sort lies outside the sequence.
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// Length of the sequence.
        len: usize,
    },

    /// The algorithm selector did not name a known algorithm.
    UnsupportedAlgorithm(String),
}

impl Display for SortError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            SortError::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            SortError::IndexOutOfBounds { index, len } => {
                write!(f, "Invalid input: index {index} out of bounds for length {len}")
            }
            SortError::UnsupportedAlgorithm(name) => write!(
                f,
                "Unsupported algorithm `{name}`; expected one of: quick, merge, insertion"
            ),
        }
    }
}

impl Error for SortError {}
