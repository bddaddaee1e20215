//! The blocked suite over [`BlockedArray`].
//!
//! Only block-major traversal is offered, and it is the default. `create`
//! sizes blocks to the default 64 KiB budget; `create_with_block_hint`
//! takes the hint as the block side.

use tessel_array::BlockedArray;

use crate::entries;
use crate::handle::A2;
use crate::small;
use crate::suite::{Apply, MethodSuite, SmallApply};

/// Method suite for cache-blocked arrays.
pub static BLOCKED: MethodSuite = MethodSuite {
    create,
    create_with_block_hint,
    destroy: entries::destroy::<BlockedArray>,
    width: entries::width::<BlockedArray>,
    height: entries::height::<BlockedArray>,
    element_size: entries::element_size::<BlockedArray>,
    block_size: entries::block_size::<BlockedArray>,
    at: entries::at::<BlockedArray>,
    map_row_major: None,
    map_col_major: None,
    map_block_major: Some(map_block_major),
    map_default: Some(map_block_major),
    small_map_row_major: None,
    small_map_col_major: None,
    small_map_block_major: Some(small_map_block_major),
    small_map_default: Some(small_map_block_major),
};

fn create(width: usize, height: usize, element_size: usize) -> A2 {
    A2::new(
        &BLOCKED,
        BlockedArray::with_size_hint(width, height, element_size),
    )
}

fn create_with_block_hint(width: usize, height: usize, element_size: usize, hint: usize) -> A2 {
    A2::new(&BLOCKED, BlockedArray::new(width, height, element_size, hint))
}

fn map_block_major(a2: &mut A2, apply: Apply<'_>) {
    a2.backing_mut::<BlockedArray>().map_block_major(apply);
}

fn small_map_block_major(a2: &mut A2, apply: SmallApply<'_>) {
    small::adapt(map_block_major, a2, apply);
}
