//! Row-major and cache-blocked 2D arrays of fixed-size slots.
//!
//! Two storage strategies for the same [`Array2`](tessel_core::Array2)
//! contract:
//!
//! ```text
//! RowMajorArray
//! └── LinearStore (width × height slots, slot = row * width + col)
//!
//! BlockedArray
//! └── block grid (ceil(width/B) × ceil(height/B), row-major)
//!     └── LinearStore per block (B × B slots, slot = B * (col % B) + row % B)
//! ```
//!
//! Blocks are allocated eagerly and uniformly, including the ragged blocks
//! on the right and bottom edges whose trailing slots never hold a logical
//! cell. Traversals skip those padding slots.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod blocked;
pub mod config;
pub mod row_major;

#[cfg(test)]
pub(crate) mod compliance;

pub use blocked::BlockedArray;
pub use config::BlockConfig;
pub use row_major::RowMajorArray;
