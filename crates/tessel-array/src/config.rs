//! Block sizing parameters.

/// Configuration for choosing a blocked array's block side.
///
/// A block of side `B` holding `element_size`-byte slots occupies
/// `B * B * element_size` bytes. The block side is chosen so that one block
/// stays within `budget_bytes`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockConfig {
    /// Target footprint of a single block in bytes.
    ///
    /// Default: 65_536 (64 KiB).
    pub budget_bytes: usize,
}

impl BlockConfig {
    /// Default block budget: 64 KiB.
    pub const DEFAULT_BUDGET_BYTES: usize = 65_536;

    /// Create a config with the given block budget.
    pub fn new(budget_bytes: usize) -> Self {
        Self { budget_bytes }
    }

    /// Block side for slots of `element_size` bytes.
    ///
    /// `floor(sqrt(budget_bytes / element_size))` when the element fits in
    /// the budget, otherwise 1. A zero element size also yields 1; array
    /// construction rejects it separately.
    pub fn block_side_for(&self, element_size: usize) -> usize {
        if element_size == 0 || element_size > self.budget_bytes {
            return 1;
        }
        (self.budget_bytes / element_size).isqrt()
    }
}

impl Default for BlockConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BUDGET_BYTES)
    }
}
