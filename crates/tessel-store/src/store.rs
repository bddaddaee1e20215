//! Contiguous slot buffers.

use std::slice::{ChunksExact, ChunksExactMut};

use tessel_core::{precondition_failed, ArrayError};

/// A contiguous sequence of fixed-size byte slots.
///
/// The backing storage is allocated to its full size at creation and never
/// grows or shrinks. Slot `i` occupies bytes
/// `[i * element_size, (i + 1) * element_size)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinearStore {
    /// Backing storage, `len * element_size` bytes.
    data: Vec<u8>,
    /// Size of each slot in bytes, always > 0.
    element_size: usize,
    /// Number of slots.
    len: usize,
}

impl LinearStore {
    /// Allocate `len` zeroed slots of `element_size` bytes.
    ///
    /// # Panics
    ///
    /// Panics if `element_size == 0`, if `len * element_size` overflows, or
    /// if the allocation fails. See [`try_new`](Self::try_new) for the
    /// non-panicking form.
    #[track_caller]
    pub fn new(len: usize, element_size: usize) -> Self {
        Self::try_new(len, element_size).unwrap_or_else(|e| precondition_failed(e))
    }

    /// Allocate `len` zeroed slots of `element_size` bytes, reporting
    /// precondition failures instead of panicking.
    pub fn try_new(len: usize, element_size: usize) -> Result<Self, ArrayError> {
        if element_size == 0 {
            return Err(ArrayError::ZeroElementSize);
        }
        let bytes = len
            .checked_mul(element_size)
            .ok_or(ArrayError::CapacityOverflow {
                slots: len,
                element_size,
            })?;
        let mut data = Vec::new();
        data.try_reserve_exact(bytes)
            .map_err(|_| ArrayError::AllocationFailed { bytes })?;
        data.resize(bytes, 0);
        Ok(Self {
            data,
            element_size,
            len,
        })
    }

    /// The slot at `index`, or `None` if `index >= len`.
    pub fn get(&self, index: usize) -> Option<&[u8]> {
        if index >= self.len {
            return None;
        }
        let start = index * self.element_size;
        Some(&self.data[start..start + self.element_size])
    }

    /// The mutable slot at `index`, or `None` if `index >= len`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut [u8]> {
        if index >= self.len {
            return None;
        }
        let start = index * self.element_size;
        Some(&mut self.data[start..start + self.element_size])
    }

    /// The slot at `index`.
    ///
    /// # Panics
    ///
    /// Panics with [`ArrayError::IndexOutOfBounds`] if `index >= len`.
    #[track_caller]
    pub fn at(&self, index: usize) -> &[u8] {
        let len = self.len;
        self.get(index)
            .unwrap_or_else(|| precondition_failed(ArrayError::IndexOutOfBounds { index, len }))
    }

    /// The mutable slot at `index`.
    ///
    /// # Panics
    ///
    /// Panics with [`ArrayError::IndexOutOfBounds`] if `index >= len`.
    #[track_caller]
    pub fn at_mut(&mut self, index: usize) -> &mut [u8] {
        let len = self.len;
        self.get_mut(index)
            .unwrap_or_else(|| precondition_failed(ArrayError::IndexOutOfBounds { index, len }))
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the store holds no slots.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Size of each slot in bytes.
    pub fn element_size(&self) -> usize {
        self.element_size
    }

    /// Memory usage of the backing storage in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.data.len()
    }

    /// The whole backing buffer, slots laid end to end.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Iterate over slots in index order.
    pub fn slots(&self) -> ChunksExact<'_, u8> {
        self.data.chunks_exact(self.element_size)
    }

    /// Iterate mutably over slots in index order.
    pub fn slots_mut(&mut self) -> ChunksExactMut<'_, u8> {
        self.data.chunks_exact_mut(self.element_size)
    }
}
