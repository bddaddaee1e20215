//! Method suite usage errors.

use std::error::Error;
use std::fmt;

use tessel_core::Order;

/// Misuse of a method suite that the caller is expected to detect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MethodError {
    /// The suite has no entry for this traversal order.
    UnsupportedTraversal {
        /// The requested order.
        order: Order,
    },
    /// The suite declares no default traversal.
    NoDefaultTraversal,
    /// A handle was passed to a suite whose backing it does not hold.
    /// Always fatal.
    ForeignHandle {
        /// Type name of the backing the suite expected.
        expected: &'static str,
    },
}

impl fmt::Display for MethodError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedTraversal { order } => {
                write!(f, "method suite does not support {order} mapping")
            }
            Self::NoDefaultTraversal => write!(f, "method suite has no default mapping"),
            Self::ForeignHandle { expected } => {
                write!(f, "handle was not created by a suite for {expected}")
            }
        }
    }
}

impl Error for MethodError {}
