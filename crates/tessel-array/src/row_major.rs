//! Flat row-major 2D array.

use tessel_core::{precondition_failed, row_major_index, Array2, ArrayError, Shape};
use tessel_store::LinearStore;

/// A `width × height` array of fixed-size slots stored row by row.
///
/// Cell `(col, row)` lives at slot `row * width + col` of a single
/// [`LinearStore`].
#[derive(Clone, Debug)]
pub struct RowMajorArray {
    store: LinearStore,
    width: usize,
    height: usize,
}

impl RowMajorArray {
    /// Create a zeroed `width × height` array of `element_size`-byte slots.
    ///
    /// # Panics
    ///
    /// Panics if `element_size == 0`, if the storage size overflows, or if
    /// allocation fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use tessel_array::RowMajorArray;
    /// use tessel_core::Array2;
    ///
    /// let mut a = RowMajorArray::new(5, 3, 4);
    /// a.at_mut(4, 2).copy_from_slice(&7u32.to_ne_bytes());
    /// assert_eq!(a.at(4, 2), &7u32.to_ne_bytes());
    /// assert_eq!((a.width(), a.height(), a.element_size()), (5, 3, 4));
    /// ```
    #[track_caller]
    pub fn new(width: usize, height: usize, element_size: usize) -> Self {
        Self::try_new(width, height, element_size).unwrap_or_else(|e| precondition_failed(e))
    }

    /// Create a zeroed array, reporting precondition failures instead of
    /// panicking.
    pub fn try_new(width: usize, height: usize, element_size: usize) -> Result<Self, ArrayError> {
        let slots = width
            .checked_mul(height)
            .ok_or(ArrayError::CapacityOverflow {
                slots: usize::MAX,
                element_size,
            })?;
        let store = LinearStore::try_new(slots, element_size)?;
        log::debug!("row-major array {width}x{height}, {element_size}-byte slots");
        Ok(Self {
            store,
            width,
            height,
        })
    }

    /// Visit every cell in row-major order: rows increasing, column index
    /// varying fastest.
    ///
    /// `apply(col, row, shape, slot)` is called exactly `width * height`
    /// times, synchronously.
    pub fn map_row_major<F>(&mut self, mut apply: F)
    where
        F: FnMut(usize, usize, &Shape, &mut [u8]),
    {
        let shape = self.shape();
        log::trace!("map_row_major over {}x{}", shape.width, shape.height);
        // Slot order is row-major already; width > 0 whenever a slot exists.
        for (i, slot) in self.store.slots_mut().enumerate() {
            apply(i % shape.width, i / shape.width, &shape, slot);
        }
    }

    /// Visit every cell in column-major order: columns increasing, row index
    /// varying fastest.
    pub fn map_col_major<F>(&mut self, mut apply: F)
    where
        F: FnMut(usize, usize, &Shape, &mut [u8]),
    {
        let shape = self.shape();
        log::trace!("map_col_major over {}x{}", shape.width, shape.height);
        for col in 0..shape.width {
            for row in 0..shape.height {
                let slot = self.store.at_mut(row_major_index(col, row, shape.width));
                apply(col, row, &shape, slot);
            }
        }
    }

    /// The backing store, slots in row-major order.
    pub fn store(&self) -> &LinearStore {
        &self.store
    }

    /// Memory usage of the slot storage in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.store.memory_bytes()
    }
}

impl Array2 for RowMajorArray {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn element_size(&self) -> usize {
        self.store.element_size()
    }

    fn get(&self, col: usize, row: usize) -> Option<&[u8]> {
        if col >= self.width || row >= self.height {
            return None;
        }
        self.store.get(row_major_index(col, row, self.width))
    }

    fn get_mut(&mut self, col: usize, row: usize) -> Option<&mut [u8]> {
        if col >= self.width || row >= self.height {
            return None;
        }
        self.store.get_mut(row_major_index(col, row, self.width))
    }
}
