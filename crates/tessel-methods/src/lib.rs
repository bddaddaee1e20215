//! Method suites: one dispatch table, many array backings.
//!
//! A [`MethodSuite`] is an immutable table of entry points (create, destroy,
//! shape queries, element access, and four traversal orders in full and
//! reduced-argument forms). Every backing strategy publishes one suite with
//! the same shape, so an algorithm written against a suite runs unchanged on
//! [`PLAIN`] (row-major) or [`BLOCKED`] (cache-blocked) storage, or on any
//! future suite built from [`entries`].
//!
//! Arrays are reached only through the opaque [`A2`] handle, which owns its
//! backing and remembers the suite that created it.
//!
//! # Entry order
//!
//! Fields of [`MethodSuite`] follow the protocol order shared with the C
//! table in `tessel-ffi`:
//!
//! ```text
//! create, create_with_block_hint, destroy, width, height, element_size,
//! block_size, at, map_row_major, map_col_major, map_block_major,
//! map_default, small_map_row_major, small_map_col_major,
//! small_map_block_major, small_map_default
//! ```
//!
//! # Quick start
//!
//! ```
//! use tessel_methods::{BLOCKED, PLAIN};
//!
//! for suite in [&PLAIN, &BLOCKED] {
//!     let mut a = (suite.create)(5, 3, 4);
//!     a.at(4, 2).copy_from_slice(&9u32.to_ne_bytes());
//!
//!     let mut total = 0u32;
//!     a.small_map_default(&mut |slot| {
//!         total += u32::from_ne_bytes(slot[..4].try_into().unwrap());
//!     })
//!     .unwrap();
//!     assert_eq!(total, 9);
//!     a.destroy();
//! }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod blocked;
pub mod entries;
pub mod error;
pub mod handle;
pub mod plain;
pub mod small;
pub mod suite;

#[cfg(test)]
pub(crate) mod compliance;

pub use blocked::BLOCKED;
pub use error::MethodError;
pub use handle::A2;
pub use plain::PLAIN;
pub use suite::{Apply, AtFn, MapFn, MethodSuite, SmallApply, SmallMapFn};
pub use tessel_core::{Order, Shape};
