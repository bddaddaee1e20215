//! The method suite table and its entry signatures.

use tessel_core::{Order, Shape};

use crate::error::MethodError;
use crate::handle::A2;

/// Full per-element callback: `apply(col, row, shape, slot)`.
///
/// The shape is that of the array being traversed. Caller context lives in
/// the closure's captures.
pub type Apply<'a> = &'a mut dyn FnMut(usize, usize, &Shape, &mut [u8]);

/// Reduced per-element callback: `apply(slot)`.
pub type SmallApply<'a> = &'a mut dyn FnMut(&mut [u8]);

/// A full traversal entry.
pub type MapFn = fn(&mut A2, Apply<'_>);

/// A reduced traversal entry.
pub type SmallMapFn = fn(&mut A2, SmallApply<'_>);

/// Element access entry: the slot for `(col, row)`. Out-of-bounds is fatal.
pub type AtFn = fn(&mut A2, usize, usize) -> &mut [u8];

/// One backing strategy's complete set of entry points.
///
/// Suites are `'static` and never change after construction. Absent
/// traversal orders are `None`; callers must check before invoking, which
/// [`map`](Self::map) and [`small_map`](Self::small_map) do for them.
/// A reduced entry is present exactly when the matching full entry is.
#[derive(Clone, Copy)]
pub struct MethodSuite {
    /// Create a `width x height` array of `element_size`-byte slots.
    pub create: fn(usize, usize, usize) -> A2,
    /// As `create`, with a block side hint the suite may ignore.
    pub create_with_block_hint: fn(usize, usize, usize, usize) -> A2,
    /// Release the array and everything it owns.
    pub destroy: fn(A2),
    /// Width in cells.
    pub width: fn(&A2) -> usize,
    /// Height in cells.
    pub height: fn(&A2) -> usize,
    /// Slot size in bytes.
    pub element_size: fn(&A2) -> usize,
    /// Block side, 1 for unblocked backings.
    pub block_size: fn(&A2) -> usize,
    /// Element access.
    pub at: AtFn,
    /// Row-major traversal, if cheap for this backing.
    pub map_row_major: Option<MapFn>,
    /// Column-major traversal, if cheap for this backing.
    pub map_col_major: Option<MapFn>,
    /// Block-major traversal, if this backing is blocked.
    pub map_block_major: Option<MapFn>,
    /// The fastest traversal this backing offers.
    pub map_default: Option<MapFn>,
    /// Reduced row-major traversal.
    pub small_map_row_major: Option<SmallMapFn>,
    /// Reduced column-major traversal.
    pub small_map_col_major: Option<SmallMapFn>,
    /// Reduced block-major traversal.
    pub small_map_block_major: Option<SmallMapFn>,
    /// Reduced default traversal.
    pub small_map_default: Option<SmallMapFn>,
}

impl MethodSuite {
    /// The full traversal entry for `order`.
    pub fn map(&self, order: Order) -> Result<MapFn, MethodError> {
        let entry = match order {
            Order::RowMajor => self.map_row_major,
            Order::ColMajor => self.map_col_major,
            Order::BlockMajor => self.map_block_major,
        };
        entry.ok_or(MethodError::UnsupportedTraversal { order })
    }

    /// The reduced traversal entry for `order`.
    pub fn small_map(&self, order: Order) -> Result<SmallMapFn, MethodError> {
        let entry = match order {
            Order::RowMajor => self.small_map_row_major,
            Order::ColMajor => self.small_map_col_major,
            Order::BlockMajor => self.small_map_block_major,
        };
        entry.ok_or(MethodError::UnsupportedTraversal { order })
    }

    /// The full default traversal entry.
    pub fn default_map(&self) -> Result<MapFn, MethodError> {
        self.map_default.ok_or(MethodError::NoDefaultTraversal)
    }

    /// The reduced default traversal entry.
    pub fn default_small_map(&self) -> Result<SmallMapFn, MethodError> {
        self.small_map_default.ok_or(MethodError::NoDefaultTraversal)
    }

    /// Whether a full traversal in `order` is offered.
    pub fn supports(&self, order: Order) -> bool {
        self.map(order).is_ok()
    }

    /// The orders this suite offers, in [`Order::ALL`] order.
    pub fn supported_orders(&self) -> Vec<Order> {
        Order::ALL
            .iter()
            .copied()
            .filter(|&o| self.supports(o))
            .collect()
    }
}

impl std::fmt::Debug for MethodSuite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MethodSuite")
            .field("orders", &self.supported_orders())
            .field("has_default", &self.map_default.is_some())
            .finish_non_exhaustive()
    }
}
