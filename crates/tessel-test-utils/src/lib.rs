//! Test fixtures and reference orders for Tessel development.
//!
//! Provides slot codecs for `u32` payloads, reference visit orders computed
//! independently of the array implementations, and deterministic fills for
//! any [`Array2`] backing.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{fill_seeded, snapshot};

use tessel_core::Array2;

/// Write `value` into the first four bytes of `slot` (native endian).
pub fn put_u32(slot: &mut [u8], value: u32) {
    slot[..4].copy_from_slice(&value.to_ne_bytes());
}

/// Read a `u32` from the first four bytes of `slot` (native endian).
pub fn get_u32(slot: &[u8]) -> u32 {
    let mut bytes = [0u8; 4];
    bytes.copy_from_slice(&slot[..4]);
    u32::from_ne_bytes(bytes)
}

/// Cell label used by [`fill_labels`]: unique per `(col, row)`.
pub fn label(col: usize, row: usize, width: usize) -> u32 {
    (row * width + col) as u32
}

/// Write [`label`] into every cell through `at_mut`.
///
/// Requires `element_size >= 4`.
pub fn fill_labels(array: &mut dyn Array2) {
    let width = array.width();
    for row in 0..array.height() {
        for col in 0..width {
            put_u32(array.at_mut(col, row), label(col, row, width));
        }
    }
}

/// Read every cell as a `u32`, in row-major order.
pub fn read_labels(array: &dyn Array2) -> Vec<u32> {
    let mut out = Vec::with_capacity(array.width() * array.height());
    for row in 0..array.height() {
        for col in 0..array.width() {
            out.push(get_u32(array.at(col, row)));
        }
    }
    out
}

/// `(0,0), (1,0), ..., (w-1,0), (0,1), ..., (w-1,h-1)`.
pub fn row_major_order(width: usize, height: usize) -> Vec<(usize, usize)> {
    let mut out = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            out.push((col, row));
        }
    }
    out
}

/// `(0,0), (0,1), ..., (0,h-1), (1,0), ..., (w-1,h-1)`.
pub fn col_major_order(width: usize, height: usize) -> Vec<(usize, usize)> {
    let mut out = Vec::with_capacity(width * height);
    for col in 0..width {
        for row in 0..height {
            out.push((col, row));
        }
    }
    out
}

/// Block-major order for block side `block`: cells sorted by
/// `(block col, block row, col, row)`.
pub fn block_major_order(width: usize, height: usize, block: usize) -> Vec<(usize, usize)> {
    let mut out = row_major_order(width, height);
    out.sort_by_key(|&(c, r)| (c / block, r / block, c, r));
    out
}
