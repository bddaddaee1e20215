//! Per-thread registry of arrays created through the C tables.
//!
//! Entries are `Rc`-shared so a traversal can keep its array alive while
//! the callback looks up other handles, or the same handle's shape. The
//! table borrow is only held for the lookup itself.

use std::cell::{RefCell, RefMut};
use std::rc::Rc;

use tessel_core::Shape;
use tessel_methods::{MethodSuite, A2};

use crate::error::FfiError;
use crate::handle::HandleTable;

pub(crate) struct Entry {
    suite: &'static MethodSuite,
    shape: Shape,
    array: RefCell<A2>,
}

impl Entry {
    pub(crate) fn shape(&self) -> Shape {
        self.shape
    }

    /// Exclusive access to the array. Fails while a traversal holds it.
    pub(crate) fn array_mut(&self, handle: u64) -> Result<RefMut<'_, A2>, FfiError> {
        self.array
            .try_borrow_mut()
            .map_err(|_| FfiError::Busy { handle })
    }
}

thread_local! {
    static ARRAYS: RefCell<HandleTable<Rc<Entry>>> = const { RefCell::new(HandleTable::new()) };
}

/// Register a newly created array and return its handle.
pub(crate) fn insert(array: A2) -> u64 {
    let entry = Rc::new(Entry {
        suite: array.suite(),
        shape: array.shape(),
        array: RefCell::new(array),
    });
    ARRAYS.with(|arrays| arrays.borrow_mut().insert(entry))
}

/// The entry behind `handle`, which must have been created by `suite`.
pub(crate) fn lookup(handle: u64, suite: &'static MethodSuite) -> Result<Rc<Entry>, FfiError> {
    let entry = ARRAYS
        .with(|arrays| arrays.borrow().get(handle).cloned())
        .ok_or(FfiError::InvalidHandle { handle })?;
    if !std::ptr::eq(entry.suite, suite) {
        return Err(FfiError::ForeignHandle { handle });
    }
    Ok(entry)
}

/// Unregister `handle` and hand back its array.
pub(crate) fn remove(handle: u64, suite: &'static MethodSuite) -> Result<A2, FfiError> {
    lookup(handle, suite)?;
    let entry = ARRAYS
        .with(|arrays| arrays.borrow_mut().remove(handle))
        .ok_or(FfiError::InvalidHandle { handle })?;
    match Rc::try_unwrap(entry) {
        Ok(entry) => Ok(entry.array.into_inner()),
        Err(_) => Err(FfiError::Busy { handle }),
    }
}

/// Arrays currently registered on this thread.
pub(crate) fn live() -> usize {
    ARRAYS.with(|arrays| arrays.borrow().len())
}
