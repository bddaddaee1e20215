//! Tessel: two-dimensional arrays of fixed-size slots, stored row-major or
//! in square cache blocks, behind one interchangeable method suite.
//!
//! This is the facade crate that re-exports the public API of the Tessel
//! sub-crates. Adding `tessel` as a single dependency is usually enough.
//!
//! # Quick start
//!
//! ```rust
//! use tessel::prelude::*;
//!
//! // An algorithm written once against a suite.
//! fn brightest(suite: &'static MethodSuite) -> u32 {
//!     let mut image = (suite.create)(64, 48, 4);
//!     image.map_default(&mut |col, row, _, slot| {
//!         slot.copy_from_slice(&((col * row) as u32).to_ne_bytes());
//!     })
//!     .unwrap();
//!
//!     let mut rotated = Transform::Rotate90.apply_default(&mut image).unwrap();
//!     let mut best = 0u32;
//!     rotated
//!         .small_map_default(&mut |slot| {
//!             best = best.max(u32::from_ne_bytes(slot[..4].try_into().unwrap()));
//!         })
//!         .unwrap();
//!     best
//! }
//!
//! assert_eq!(brightest(&PLAIN), 63 * 47);
//! assert_eq!(brightest(&BLOCKED), 63 * 47);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `tessel-core` | `Array2`, `Shape`, `Order`, `ArrayError` |
//! | [`store`] | `tessel-store` | The flat slot buffer |
//! | [`array`] | `tessel-array` | Row-major and blocked backings, `BlockConfig` |
//! | [`methods`] | `tessel-methods` | Method suites and the `A2` handle |
//! | [`transform`] | `tessel-transform` | Rotations, flips, transpose |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and the backing capability trait (`tessel-core`).
pub use tessel_core as types;

/// The flat fixed-stride slot buffer (`tessel-store`).
///
/// [`store::LinearStore`] owns the bytes of every backing.
pub use tessel_store as store;

/// Concrete backings (`tessel-array`).
///
/// [`array::RowMajorArray`] and [`array::BlockedArray`], plus the
/// [`array::BlockConfig`] that sizes blocks.
pub use tessel_array as array;

/// Method suites (`tessel-methods`).
///
/// [`methods::PLAIN`] and [`methods::BLOCKED`] share the
/// [`methods::MethodSuite`] layout and produce [`methods::A2`] handles.
pub use tessel_methods as methods;

/// Geometric transforms over any suite (`tessel-transform`).
pub use tessel_transform as transform;

/// Common imports for typical Tessel usage.
///
/// ```rust
/// use tessel::prelude::*;
/// ```
pub mod prelude {
    // Core
    pub use tessel_core::{Array2, ArrayError, Order, Shape};

    // Backings
    pub use tessel_array::{BlockConfig, BlockedArray, RowMajorArray};

    // Suites
    pub use tessel_methods::{MethodError, MethodSuite, A2, BLOCKED, PLAIN};

    // Transforms
    pub use tessel_transform::{Transform, TransformError};
}
