//! Precondition failures for array construction and access.
//!
//! Array operations never return soft error codes: a violated precondition
//! is fatal. [`ArrayError`] names each violation so that the `try_*`
//! constructors can hand it back, and so that the panicking paths carry a
//! precise message.

use std::error::Error;
use std::fmt;

/// A violated precondition of an array operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// Element size must be at least one byte.
    ZeroElementSize,
    /// Block side must be at least 1.
    ZeroBlockSide,
    /// The requested storage does not fit in `usize` bytes.
    CapacityOverflow {
        /// Number of slots requested.
        slots: usize,
        /// Size of each slot in bytes.
        element_size: usize,
    },
    /// The allocator could not provide the requested storage.
    AllocationFailed {
        /// Number of bytes requested.
        bytes: usize,
    },
    /// A `(col, row)` pair outside the array.
    OutOfBounds {
        /// Requested column.
        col: usize,
        /// Requested row.
        row: usize,
        /// Array width.
        width: usize,
        /// Array height.
        height: usize,
    },
    /// A linear slot index outside a store.
    IndexOutOfBounds {
        /// Requested index.
        index: usize,
        /// Number of slots in the store.
        len: usize,
    },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroElementSize => write!(f, "element size must be positive"),
            Self::ZeroBlockSide => write!(f, "block side must be at least 1"),
            Self::CapacityOverflow {
                slots,
                element_size,
            } => {
                write!(
                    f,
                    "capacity overflow: {slots} slots of {element_size} bytes"
                )
            }
            Self::AllocationFailed { bytes } => {
                write!(f, "allocation of {bytes} bytes failed")
            }
            Self::OutOfBounds {
                col,
                row,
                width,
                height,
            } => {
                write!(
                    f,
                    "cell (col {col}, row {row}) out of bounds for {width}x{height} array"
                )
            }
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "slot index {index} out of bounds for store of {len} slots")
            }
        }
    }
}

impl Error for ArrayError {}

/// Take the fatal path for a violated precondition.
///
/// Panics with the error's `Display` text. Used by every non-`try`
/// constructor and by the `at` accessors.
#[cold]
#[track_caller]
pub fn precondition_failed(err: ArrayError) -> ! {
    panic!("{err}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_message_names_cell_and_shape() {
        let err = ArrayError::OutOfBounds {
            col: 7,
            row: 2,
            width: 5,
            height: 3,
        };
        assert_eq!(
            err.to_string(),
            "cell (col 7, row 2) out of bounds for 5x3 array"
        );
    }

    #[test]
    #[should_panic(expected = "element size must be positive")]
    fn precondition_failed_panics_with_display_text() {
        precondition_failed(ArrayError::ZeroElementSize);
    }
}
