//! Transform errors.

use std::error::Error;
use std::fmt;

use tessel_methods::MethodError;

/// Why a transform could not be built or applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransformError {
    /// Rotation angle is not a multiple of 90 in `0..=270`.
    InvalidRotation {
        /// The rejected angle in degrees.
        degrees: i32,
    },
    /// Flip direction is neither `horizontal` nor `vertical`.
    InvalidFlip {
        /// The rejected direction.
        direction: String,
    },
    /// The source suite cannot traverse in the requested order.
    Method(MethodError),
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRotation { degrees } => {
                write!(f, "rotation must be 0, 90, 180 or 270 degrees, got {degrees}")
            }
            Self::InvalidFlip { direction } => {
                write!(f, "flip must be horizontal or vertical, got {direction:?}")
            }
            Self::Method(e) => write!(f, "{e}"),
        }
    }
}

impl Error for TransformError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Method(e) => Some(e),
            Self::InvalidRotation { .. } | Self::InvalidFlip { .. } => None,
        }
    }
}

impl From<MethodError> for TransformError {
    fn from(e: MethodError) -> Self {
        Self::Method(e)
    }
}
