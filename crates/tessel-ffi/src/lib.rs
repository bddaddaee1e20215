//! C method tables for Tessel arrays.
//!
//! [`tessel_methods_plain`] and [`tessel_methods_blocked`] return immutable
//! tables of nullable C function pointers laid out in the same entry order
//! as [`tessel_methods::MethodSuite`]. A C algorithm written against
//! `const TesselMethods *` runs on either backing:
//!
//! ```c
//! const TesselMethods *m = tessel_methods_blocked();
//! uint64_t a = m->create(640, 480, sizeof(float));
//! m->small_map_default(a, zero_fill, NULL);
//! m->destroy(&a);
//! ```
//!
//! Handles are thread-local: an array is only reachable from the thread
//! that created it. Contract violations abort the process after logging.
//!
//! This is the one crate that contains `unsafe` code.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod error;
mod guard;
pub mod handle;
mod registry;
pub mod table;

pub use error::FfiError;
pub use handle::NULL_HANDLE;
pub use table::{
    tessel_live_arrays, tessel_methods_blocked, tessel_methods_plain, TesselApplyFn, TesselMapFn, TesselMethods,
    TesselSmallApplyFn, TesselSmallMapFn,
};
