//! Error type shared by every collection in the crate.

use std::fmt;

/// Convenience alias for results returned by collection operations.
pub type Result<T> = core::result::Result<T, CollectionError>;

/// Errors raised by collection operations.
///
/// Every operation validates its arguments before touching any state, so a
/// returned error always leaves the collection exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionError {
    /// A hash map key was not a string.
    InvalidKey,
    /// A position could not be reached for the current length.
    OutOfBounds {
        /// The position that was requested.
        position: isize,
        /// Number of elements at the time of the request.
        len: usize,
    },
    /// The operation needs at least one element but the structure is empty.
    Underflow,
    /// A bounded structure is already at capacity.
    Overflow {
        /// The configured capacity.
        capacity: usize,
    },
    /// A maximum or minimum was requested over values that are not totally
    /// ordered numbers.
    NonNumeric,
    /// A hash map was asked for zero buckets.
    InvalidCapacity,
}

impl CollectionError {
    /// Builds an [`CollectionError::OutOfBounds`] from an unsigned position.
    pub(crate) fn out_of_bounds(position: usize, len: usize) -> Self {
        CollectionError::OutOfBounds {
            position: isize::try_from(position).unwrap_or(isize::MAX),
            len,
        }
    }
}

impl fmt::Display for CollectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollectionError::InvalidKey => write!(f, "Key must be a string"),
            CollectionError::OutOfBounds { position, len } => {
                write!(
                    f,
                    "Out of bounds: position {} is out of range for length {}",
                    position, len
                )
            }
            CollectionError::Underflow => write!(f, "Underflow: The structure is empty"),
            CollectionError::Overflow { capacity } => {
                write!(f, "Overflow: Maximum size of {} exceeded", capacity)
            }
            CollectionError::NonNumeric => {
                write!(f, "Non-Numeric Values: Contains non numeric values")
            }
            CollectionError::InvalidCapacity => {
                write!(f, "Capacity must be a positive number of buckets")
            }
        }
    }
}

impl std::error::Error for CollectionError {}
