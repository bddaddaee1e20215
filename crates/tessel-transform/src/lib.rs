//! Geometric transforms written once against a method suite.
//!
//! [`Transform::apply`] creates the destination through the source's own
//! suite and copies each slot with a single traversal, so the same code
//! rotates a row-major or a blocked array. Slots are copied as opaque
//! bytes; the element type does not matter.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod transform;

pub use error::TransformError;
pub use transform::Transform;
