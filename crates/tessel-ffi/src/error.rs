//! Contract violations detected at the C boundary.

use std::error::Error;
use std::fmt;

use tessel_methods::MethodError;

/// A misuse of the C tables. Every variant is fatal once it reaches the
/// boundary; the enum exists so the checks can be tested without aborting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FfiError {
    /// The handle is zero, stale, or belongs to another thread.
    InvalidHandle {
        /// The offending handle.
        handle: u64,
    },
    /// The handle was created through a different table.
    ForeignHandle {
        /// The offending handle.
        handle: u64,
    },
    /// A width, height or coordinate was negative.
    Negative {
        /// Argument name.
        name: &'static str,
        /// Value received.
        value: i32,
    },
    /// An element size or block hint was not positive.
    NotPositive {
        /// Argument name.
        name: &'static str,
        /// Value received.
        value: i32,
    },
    /// A required pointer or callback was null.
    Null {
        /// Argument name.
        name: &'static str,
    },
    /// The array is being traversed and cannot be borrowed again.
    Busy {
        /// The traversed array.
        handle: u64,
    },
    /// A traversal entry the table advertises failed to resolve.
    Method(MethodError),
}

impl fmt::Display for FfiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidHandle { handle } => write!(f, "invalid array handle {handle:#x}"),
            Self::ForeignHandle { handle } => {
                write!(f, "array handle {handle:#x} belongs to another method table")
            }
            Self::Negative { name, value } => write!(f, "{name} must not be negative, got {value}"),
            Self::NotPositive { name, value } => write!(f, "{name} must be positive, got {value}"),
            Self::Null { name } => write!(f, "{name} must not be null"),
            Self::Busy { handle } => {
                write!(f, "array {handle:#x} is in use by its own traversal")
            }
            Self::Method(e) => write!(f, "{e}"),
        }
    }
}

impl Error for FfiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Method(e) => Some(e),
            _ => None,
        }
    }
}

impl From<MethodError> for FfiError {
    fn from(e: MethodError) -> Self {
        Self::Method(e)
    }
}
