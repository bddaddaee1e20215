//! The capability trait every backing store implements.

use std::any::Any;

use crate::error::{precondition_failed, ArrayError};
use crate::shape::Shape;

/// Element access and shape queries over a 2D array of byte slots.
///
/// Implemented by each backing strategy (row-major, blocked). Traversal
/// entry points are not part of this trait: each backing exposes only the
/// orders it supports, and the method suites publish the rest as absent.
///
/// # Object Safety
///
/// Designed for use as `dyn Array2`. Use [`downcast_ref`](Self::downcast_ref)
/// or [`downcast_mut`](Self::downcast_mut) to recover the concrete backing.
pub trait Array2: Any {
    /// Number of columns.
    fn width(&self) -> usize;

    /// Number of rows.
    fn height(&self) -> usize;

    /// Size of each slot in bytes.
    fn element_size(&self) -> usize;

    /// Side of a storage block. Unblocked layouts report 1.
    fn block_size(&self) -> usize {
        1
    }

    /// The slot at `(col, row)`, or `None` if out of bounds.
    fn get(&self, col: usize, row: usize) -> Option<&[u8]>;

    /// The mutable slot at `(col, row)`, or `None` if out of bounds.
    fn get_mut(&mut self, col: usize, row: usize) -> Option<&mut [u8]>;

    /// The slot at `(col, row)`.
    ///
    /// # Panics
    ///
    /// Panics with [`ArrayError::OutOfBounds`] if `col >= width` or
    /// `row >= height`.
    #[track_caller]
    fn at(&self, col: usize, row: usize) -> &[u8] {
        let (width, height) = (self.width(), self.height());
        match self.get(col, row) {
            Some(slot) => slot,
            None => precondition_failed(ArrayError::OutOfBounds {
                col,
                row,
                width,
                height,
            }),
        }
    }

    /// The mutable slot at `(col, row)`.
    ///
    /// # Panics
    ///
    /// Panics with [`ArrayError::OutOfBounds`] if `col >= width` or
    /// `row >= height`.
    #[track_caller]
    fn at_mut(&mut self, col: usize, row: usize) -> &mut [u8] {
        let (width, height) = (self.width(), self.height());
        match self.get_mut(col, row) {
            Some(slot) => slot,
            None => precondition_failed(ArrayError::OutOfBounds {
                col,
                row,
                width,
                height,
            }),
        }
    }

    /// Snapshot of the array's dimensions and slot layout.
    fn shape(&self) -> Shape {
        Shape {
            width: self.width(),
            height: self.height(),
            element_size: self.element_size(),
            block_size: self.block_size(),
        }
    }
}

impl dyn Array2 {
    /// Attempt to downcast a trait object to a concrete backing.
    pub fn downcast_ref<T: Array2>(&self) -> Option<&T> {
        (self as &dyn Any).downcast_ref::<T>()
    }

    /// Attempt to mutably downcast a trait object to a concrete backing.
    pub fn downcast_mut<T: Array2>(&mut self) -> Option<&mut T> {
        (self as &mut dyn Any).downcast_mut::<T>()
    }
}
