//! Reduced-argument traversal on top of a full traversal.
//!
//! A [`SmallClosure`] holds the caller's reduced callback for the duration
//! of one traversal. The full traversal hands it every cell and it forwards
//! only the slot.

use tessel_core::Shape;

use crate::handle::A2;
use crate::suite::{MapFn, SmallApply};

/// Per-traversal adapter record.
pub struct SmallClosure<'a> {
    apply: SmallApply<'a>,
    visited: usize,
}

impl<'a> SmallClosure<'a> {
    /// Wrap a reduced callback.
    pub fn new(apply: SmallApply<'a>) -> Self {
        Self { apply, visited: 0 }
    }

    /// Full-callback body: drop the coordinates and shape, forward the slot.
    pub fn forward(&mut self, _col: usize, _row: usize, _shape: &Shape, slot: &mut [u8]) {
        self.visited += 1;
        (self.apply)(slot);
    }

    /// Cells forwarded so far.
    pub fn visited(&self) -> usize {
        self.visited
    }
}

/// Run the full traversal `map` over `a2`, handing `apply` each slot.
pub fn adapt(map: MapFn, a2: &mut A2, apply: SmallApply<'_>) {
    let mut closure = SmallClosure::new(apply);
    map(a2, &mut |col, row, shape, slot| {
        closure.forward(col, row, shape, slot)
    });
    log::trace!("reduced traversal forwarded {} cells", closure.visited());
}
