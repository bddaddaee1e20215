//! Core types and traits for Tessel 2D arrays.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! vocabulary shared by every backing store and by the method suites:
//! array [`Shape`], traversal [`Order`], the [`Array2`] capability trait,
//! and the [`ArrayError`] taxonomy of precondition failures.
//!
//! # Coordinate convention
//!
//! Every layer addresses cells as `(col, row)`: column first, row second.
//! `0 <= col < width` and `0 <= row < height`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod order;
pub mod shape;
pub mod traits;

pub use error::{precondition_failed, ArrayError};
pub use order::Order;
pub use shape::{ceil_div, row_major_index, Shape};
pub use traits::Array2;
