//! The transform set and its application.

use std::fmt;

use tessel_core::Order;
use tessel_methods::{MapFn, A2};

use crate::error::TransformError;

/// A rotation, flip or transpose of a two-dimensional array.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Transform {
    /// Identity.
    Rotate0,
    /// Quarter turn clockwise.
    Rotate90,
    /// Half turn.
    Rotate180,
    /// Quarter turn counter-clockwise.
    Rotate270,
    /// Mirror left to right.
    FlipHorizontal,
    /// Mirror top to bottom.
    FlipVertical,
    /// Swap rows and columns.
    Transpose,
}

impl Transform {
    /// Every transform.
    pub const ALL: [Transform; 7] = [
        Transform::Rotate0,
        Transform::Rotate90,
        Transform::Rotate180,
        Transform::Rotate270,
        Transform::FlipHorizontal,
        Transform::FlipVertical,
        Transform::Transpose,
    ];

    /// The clockwise rotation by `degrees`.
    pub fn from_degrees(degrees: i32) -> Result<Self, TransformError> {
        match degrees {
            0 => Ok(Self::Rotate0),
            90 => Ok(Self::Rotate90),
            180 => Ok(Self::Rotate180),
            270 => Ok(Self::Rotate270),
            _ => Err(TransformError::InvalidRotation { degrees }),
        }
    }

    /// The flip named `horizontal` or `vertical`.
    pub fn from_flip(direction: &str) -> Result<Self, TransformError> {
        match direction {
            "horizontal" => Ok(Self::FlipHorizontal),
            "vertical" => Ok(Self::FlipVertical),
            _ => Err(TransformError::InvalidFlip {
                direction: direction.to_owned(),
            }),
        }
    }

    /// Whether the output swaps width and height.
    pub fn swaps_axes(self) -> bool {
        matches!(self, Self::Rotate90 | Self::Rotate270 | Self::Transpose)
    }

    /// Output `(width, height)` for a `width x height` source.
    pub fn output_dims(self, width: usize, height: usize) -> (usize, usize) {
        if self.swaps_axes() {
            (height, width)
        } else {
            (width, height)
        }
    }

    /// Where source cell `(col, row)` of a `width x height` array lands.
    pub fn destination(self, col: usize, row: usize, width: usize, height: usize) -> (usize, usize) {
        match self {
            Self::Rotate0 => (col, row),
            Self::Rotate90 => (height - row - 1, col),
            Self::Rotate180 => (width - col - 1, height - row - 1),
            Self::Rotate270 => (row, width - col - 1),
            Self::FlipHorizontal => (width - col - 1, row),
            Self::FlipVertical => (col, height - row - 1),
            Self::Transpose => (row, col),
        }
    }

    /// The transform that undoes this one.
    pub fn inverse(self) -> Self {
        match self {
            Self::Rotate90 => Self::Rotate270,
            Self::Rotate270 => Self::Rotate90,
            other => other,
        }
    }

    /// Write the transformed `src` into a new array from the same suite,
    /// traversing `src` in `order`.
    ///
    /// The destination keeps the source's element size and block side.
    pub fn apply(self, src: &mut A2, order: Order) -> Result<A2, TransformError> {
        let map = src.suite().map(order)?;
        Ok(self.copy_with(src, map, &order))
    }

    /// As [`apply`](Self::apply), in the source suite's default order.
    pub fn apply_default(self, src: &mut A2) -> Result<A2, TransformError> {
        let map = src.suite().default_map()?;
        Ok(self.copy_with(src, map, &"default"))
    }

    fn copy_with(self, src: &mut A2, map: MapFn, order: &dyn fmt::Display) -> A2 {
        let suite = src.suite();
        let shape = src.shape();
        let (w, h) = self.output_dims(shape.width, shape.height);
        log::debug!(
            "{self} of {}x{} array in {order} order",
            shape.width,
            shape.height
        );
        let mut dest = (suite.create_with_block_hint)(w, h, shape.element_size, shape.block_size);
        map(src, &mut |col, row, s, slot| {
            let (dc, dr) = self.destination(col, row, s.width, s.height);
            dest.at(dc, dr).copy_from_slice(slot);
        });
        dest
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Rotate0 => "rotate 0",
            Self::Rotate90 => "rotate 90",
            Self::Rotate180 => "rotate 180",
            Self::Rotate270 => "rotate 270",
            Self::FlipHorizontal => "flip horizontal",
            Self::FlipVertical => "flip vertical",
            Self::Transpose => "transpose",
        })
    }
}
