//! Backing-generic entry points.
//!
//! Every suite's shape queries, element access and destroy are the same
//! operation on a different concrete backing. Each function here is generic
//! over that backing and coerces to the matching [`MethodSuite`] field, so a
//! new suite writes only its create and traversal entries:
//!
//! ```
//! use tessel_array::RowMajorArray;
//! use tessel_methods::{entries, A2};
//!
//! let width: fn(&A2) -> usize = entries::width::<RowMajorArray>;
//! # let _ = width;
//! ```
//!
//! [`MethodSuite`]: crate::MethodSuite

use tessel_core::Array2;

use crate::handle::A2;

/// Drop the backing. Fatal if `a2` holds something other than `B`.
pub fn destroy<B: Array2>(a2: A2) {
    let shape = a2.backing::<B>().shape();
    log::debug!(
        "destroying {}x{} array of {}-byte slots",
        shape.width,
        shape.height,
        shape.element_size
    );
    drop(a2);
}

/// Width of a `B` backing.
pub fn width<B: Array2>(a2: &A2) -> usize {
    a2.backing::<B>().width()
}

/// Height of a `B` backing.
pub fn height<B: Array2>(a2: &A2) -> usize {
    a2.backing::<B>().height()
}

/// Slot size of a `B` backing.
pub fn element_size<B: Array2>(a2: &A2) -> usize {
    a2.backing::<B>().element_size()
}

/// Block side of a `B` backing.
pub fn block_size<B: Array2>(a2: &A2) -> usize {
    a2.backing::<B>().block_size()
}

/// Slot at `(col, row)` of a `B` backing. Out-of-bounds is fatal.
pub fn at<B: Array2>(a2: &mut A2, col: usize, row: usize) -> &mut [u8] {
    a2.backing_mut::<B>().at_mut(col, row)
}
