//! Cache-blocked 2D array.
//!
//! The array is tiled into square blocks of side `B`. Each block is its own
//! [`LinearStore`] of `B * B` slots, and the blocks sit in a row-major grid
//! of `ceil(width / B) × ceil(height / B)` cells. Locating a cell is two
//! steps:
//!
//! ```text
//! (col, row) ──► block (col / B, row / B)      grid slot  br * gw + bc
//!            └─► offset B * (col % B) + row % B  inside that block
//! ```
//!
//! The in-block offset varies the row fastest. [`BlockedArray::map_block_major`]
//! walks each block in exactly that order, so one block's storage is read
//! front to back before the traversal moves on.
//!
//! The grid is a plain row-major `Vec<LinearStore>` indexed with
//! [`row_major_index`] rather than a [`RowMajorArray`](crate::RowMajorArray),
//! which only holds byte slots, not owned blocks.

use tessel_core::{ceil_div, precondition_failed, row_major_index, Array2, ArrayError, Shape};
use tessel_store::LinearStore;

use crate::config::BlockConfig;

/// A `width × height` array of fixed-size slots stored in square blocks.
///
/// Every block is allocated at construction, including partially or fully
/// out-of-range blocks on the trailing edges, so all blocks are uniformly
/// `B × B`. Slots of a trailing block that fall beyond `width` or `height`
/// are padding: never addressed, never visited.
#[derive(Clone, Debug)]
pub struct BlockedArray {
    /// Block grid in row-major order: block `(bc, br)` at `br * grid_width + bc`.
    blocks: Vec<LinearStore>,
    grid_width: usize,
    grid_height: usize,
    width: usize,
    height: usize,
    element_size: usize,
    block_side: usize,
}

impl BlockedArray {
    /// Create a zeroed array with blocks of side `block_side`.
    ///
    /// # Panics
    ///
    /// Panics if `element_size == 0`, `block_side == 0`, the storage size
    /// overflows, or allocation fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use tessel_array::BlockedArray;
    /// use tessel_core::Array2;
    ///
    /// let a = BlockedArray::new(5, 3, 4, 2);
    /// assert_eq!((a.grid_width(), a.grid_height()), (3, 2));
    /// assert_eq!(a.block_of(4, 2), (2, 1));
    /// assert_eq!(a.block_offset(4, 2), 0);
    /// assert_eq!(a.block_size(), 2);
    /// ```
    #[track_caller]
    pub fn new(width: usize, height: usize, element_size: usize, block_side: usize) -> Self {
        Self::try_new(width, height, element_size, block_side)
            .unwrap_or_else(|e| precondition_failed(e))
    }

    /// Create a zeroed blocked array, reporting precondition failures
    /// instead of panicking.
    pub fn try_new(
        width: usize,
        height: usize,
        element_size: usize,
        block_side: usize,
    ) -> Result<Self, ArrayError> {
        if element_size == 0 {
            return Err(ArrayError::ZeroElementSize);
        }
        if block_side == 0 {
            return Err(ArrayError::ZeroBlockSide);
        }
        let overflow = ArrayError::CapacityOverflow {
            slots: usize::MAX,
            element_size,
        };
        let block_slots = block_side.checked_mul(block_side).ok_or(overflow.clone())?;
        let grid_width = ceil_div(width, block_side);
        let grid_height = ceil_div(height, block_side);
        let block_count = grid_width
            .checked_mul(grid_height)
            .ok_or(overflow.clone())?;
        block_count
            .checked_mul(block_slots)
            .and_then(|slots| slots.checked_mul(element_size))
            .ok_or(overflow)?;

        let mut blocks = Vec::new();
        blocks
            .try_reserve_exact(block_count)
            .map_err(|_| ArrayError::AllocationFailed {
                bytes: block_count * std::mem::size_of::<LinearStore>(),
            })?;
        for _ in 0..block_count {
            blocks.push(LinearStore::try_new(block_slots, element_size)?);
        }

        log::debug!(
            "blocked array {width}x{height}, {element_size}-byte slots, \
             block side {block_side}, grid {grid_width}x{grid_height}"
        );
        Ok(Self {
            blocks,
            grid_width,
            grid_height,
            width,
            height,
            element_size,
            block_side,
        })
    }

    /// Create a blocked array whose block side keeps one block within the
    /// default 64 KiB budget.
    ///
    /// # Panics
    ///
    /// As for [`new`](Self::new).
    #[track_caller]
    pub fn with_size_hint(width: usize, height: usize, element_size: usize) -> Self {
        Self::with_config(width, height, element_size, &BlockConfig::default())
    }

    /// Create a blocked array whose block side is chosen by `config`.
    ///
    /// # Panics
    ///
    /// As for [`new`](Self::new).
    #[track_caller]
    pub fn with_config(
        width: usize,
        height: usize,
        element_size: usize,
        config: &BlockConfig,
    ) -> Self {
        Self::new(width, height, element_size, config.block_side_for(element_size))
    }

    /// Visit every cell in block-major order.
    ///
    /// Blocks are taken in column-major block order (block columns outer,
    /// block rows inner). Within a block, columns are the outer loop and rows
    /// the inner loop, matching the in-block slot layout. Padding cells of
    /// ragged trailing blocks are skipped, so `apply(col, row, shape, slot)`
    /// runs exactly `width * height` times.
    pub fn map_block_major<F>(&mut self, mut apply: F)
    where
        F: FnMut(usize, usize, &Shape, &mut [u8]),
    {
        let shape = self.shape();
        let b = self.block_side;
        log::trace!(
            "map_block_major over {}x{} in {}x{} blocks",
            shape.width,
            shape.height,
            self.grid_width,
            self.grid_height
        );
        for bc in 0..self.grid_width {
            for br in 0..self.grid_height {
                let block = &mut self.blocks[row_major_index(bc, br, self.grid_width)];
                let (col0, row0) = (bc * b, br * b);
                for c in col0..col0 + b {
                    if c >= shape.width {
                        break;
                    }
                    for r in row0..row0 + b {
                        if r >= shape.height {
                            break;
                        }
                        let slot = block.at_mut(b * (c - col0) + (r - row0));
                        apply(c, r, &shape, slot);
                    }
                }
            }
        }
    }

    /// Side of each block.
    pub fn block_side(&self) -> usize {
        self.block_side
    }

    /// Number of block columns, `ceil(width / block_side)`.
    pub fn grid_width(&self) -> usize {
        self.grid_width
    }

    /// Number of block rows, `ceil(height / block_side)`.
    pub fn grid_height(&self) -> usize {
        self.grid_height
    }

    /// Total number of allocated blocks.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Block grid coordinates `(block_col, block_row)` holding `(col, row)`.
    pub fn block_of(&self, col: usize, row: usize) -> (usize, usize) {
        (col / self.block_side, row / self.block_side)
    }

    /// Slot offset of `(col, row)` within its block.
    pub fn block_offset(&self, col: usize, row: usize) -> usize {
        self.block_side * (col % self.block_side) + (row % self.block_side)
    }

    /// The block at grid position `(block_col, block_row)`, or `None` if
    /// outside the grid.
    pub fn block(&self, block_col: usize, block_row: usize) -> Option<&LinearStore> {
        if block_col >= self.grid_width || block_row >= self.grid_height {
            return None;
        }
        self.blocks
            .get(row_major_index(block_col, block_row, self.grid_width))
    }

    /// Memory usage of all blocks in bytes, padding slots included.
    pub fn memory_bytes(&self) -> usize {
        self.blocks.iter().map(LinearStore::memory_bytes).sum()
    }
}

impl Array2 for BlockedArray {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn element_size(&self) -> usize {
        self.element_size
    }

    fn block_size(&self) -> usize {
        self.block_side
    }

    fn get(&self, col: usize, row: usize) -> Option<&[u8]> {
        if col >= self.width || row >= self.height {
            return None;
        }
        let (bc, br) = self.block_of(col, row);
        let offset = self.block_offset(col, row);
        self.blocks[row_major_index(bc, br, self.grid_width)].get(offset)
    }

    fn get_mut(&mut self, col: usize, row: usize) -> Option<&mut [u8]> {
        if col >= self.width || row >= self.height {
            return None;
        }
        let (bc, br) = self.block_of(col, row);
        let offset = self.block_offset(col, row);
        self.blocks[row_major_index(bc, br, self.grid_width)].get_mut(offset)
    }
}
