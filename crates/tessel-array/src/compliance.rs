//! Array2 compliance test helpers.
//!
//! These functions verify that a backing store satisfies the `Array2`
//! contract. Reused by the row-major and blocked test modules.

use tessel_core::Array2;
use tessel_test_utils::{fill_labels, label, read_labels};

/// Assert that every in-bounds cell yields a slot of `element_size` bytes.
pub fn assert_slot_sizes(array: &dyn Array2) {
    for row in 0..array.height() {
        for col in 0..array.width() {
            let slot = array
                .get(col, row)
                .unwrap_or_else(|| panic!("in-bounds cell ({col}, {row}) returned None"));
            assert_eq!(slot.len(), array.element_size());
        }
    }
}

/// Assert that cells just past each edge are rejected by `get`/`get_mut`.
pub fn assert_edges_rejected(array: &mut dyn Array2) {
    let (w, h) = (array.width(), array.height());
    for row in 0..h {
        assert!(array.get(w, row).is_none(), "col {w} accepted at row {row}");
    }
    for col in 0..w {
        assert!(array.get(col, h).is_none(), "row {h} accepted at col {col}");
    }
    assert!(array.get_mut(w, h).is_none());
    assert!(array.get(usize::MAX, 0).is_none());
}

/// Assert that a distinct value written to every cell reads back intact,
/// i.e. no two cells share a slot.
pub fn assert_cells_distinct(array: &mut dyn Array2) {
    fill_labels(array);
    let w = array.width();
    let labels = read_labels(array);
    for (i, &value) in labels.iter().enumerate() {
        assert_eq!(value, label(i % w, i / w, w), "cell {i} was overwritten");
    }
}

/// Assert that `shape()` agrees with the individual queries.
pub fn assert_shape_consistent(array: &dyn Array2) {
    let shape = array.shape();
    assert_eq!(shape.width, array.width());
    assert_eq!(shape.height, array.height());
    assert_eq!(shape.element_size, array.element_size());
    assert_eq!(shape.block_size, array.block_size());
    assert!(shape.block_size >= 1);
}

/// Run the full compliance suite. Requires `element_size >= 4`.
pub fn run_full_compliance(array: &mut dyn Array2) {
    assert_shape_consistent(array);
    assert_slot_sizes(array);
    assert_edges_rejected(array);
    assert_cells_distinct(array);
}
