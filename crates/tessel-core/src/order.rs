//! Traversal orders.

use std::fmt;

/// The three traversal contracts a backing store may honour.
///
/// Each order visits every cell exactly once; they differ only in which
/// index varies fastest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// Rows in increasing order, column index varying fastest.
    RowMajor,
    /// Columns in increasing order, row index varying fastest.
    ColMajor,
    /// Every cell of one block before the next, blocks in column-major
    /// block order, row index varying fastest inside a block.
    BlockMajor,
}

impl Order {
    /// All orders, in dispatch-table order.
    pub const ALL: [Order; 3] = [Order::RowMajor, Order::ColMajor, Order::BlockMajor];
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RowMajor => write!(f, "row-major"),
            Self::ColMajor => write!(f, "column-major"),
            Self::BlockMajor => write!(f, "block-major"),
        }
    }
}
