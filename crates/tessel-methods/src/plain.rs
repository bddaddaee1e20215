//! The plain suite over [`RowMajorArray`].
//!
//! Row-major and column-major traversals are offered, block-major is not.
//! The default order is row-major, block side is always 1, and the block
//! hint of `create_with_block_hint` is ignored.

use tessel_array::RowMajorArray;

use crate::entries;
use crate::handle::A2;
use crate::small;
use crate::suite::{Apply, MethodSuite, SmallApply};

/// Method suite for unblocked row-major arrays.
pub static PLAIN: MethodSuite = MethodSuite {
    create,
    create_with_block_hint,
    destroy: entries::destroy::<RowMajorArray>,
    width: entries::width::<RowMajorArray>,
    height: entries::height::<RowMajorArray>,
    element_size: entries::element_size::<RowMajorArray>,
    block_size: entries::block_size::<RowMajorArray>,
    at: entries::at::<RowMajorArray>,
    map_row_major: Some(map_row_major),
    map_col_major: Some(map_col_major),
    map_block_major: None,
    map_default: Some(map_row_major),
    small_map_row_major: Some(small_map_row_major),
    small_map_col_major: Some(small_map_col_major),
    small_map_block_major: None,
    small_map_default: Some(small_map_row_major),
};

fn create(width: usize, height: usize, element_size: usize) -> A2 {
    A2::new(&PLAIN, RowMajorArray::new(width, height, element_size))
}

fn create_with_block_hint(width: usize, height: usize, element_size: usize, _hint: usize) -> A2 {
    create(width, height, element_size)
}

fn map_row_major(a2: &mut A2, apply: Apply<'_>) {
    a2.backing_mut::<RowMajorArray>().map_row_major(apply);
}

fn map_col_major(a2: &mut A2, apply: Apply<'_>) {
    a2.backing_mut::<RowMajorArray>().map_col_major(apply);
}

fn small_map_row_major(a2: &mut A2, apply: SmallApply<'_>) {
    small::adapt(map_row_major, a2, apply);
}

fn small_map_col_major(a2: &mut A2, apply: SmallApply<'_>) {
    small::adapt(map_col_major, a2, apply);
}
