//! Flat fixed-stride slot storage for Tessel arrays.
//!
//! A [`LinearStore`] is the foundational owner of raw element storage: a
//! single contiguous, zero-initialised `Vec<u8>` divided into `len` slots of
//! `element_size` bytes each. Both the row-major array and every block of a
//! blocked array are built on one.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod store;

pub use store::LinearStore;
