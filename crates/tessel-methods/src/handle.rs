//! The opaque array handle.

use std::fmt;

use tessel_core::{Array2, Order, Shape};

use crate::error::MethodError;
use crate::suite::{Apply, MethodSuite, SmallApply};

/// An owned two-dimensional array reached through a [`MethodSuite`].
///
/// The handle pairs a boxed backing with the suite that created it. Entry
/// points of one suite must only be given handles created by that suite;
/// passing a foreign handle is fatal.
///
/// Destroying consumes the handle, so it cannot be used afterwards:
///
/// ```compile_fail
/// let a = (tessel_methods::PLAIN.create)(2, 2, 4);
/// a.destroy();
/// let _ = a.width();
/// ```
pub struct A2 {
    suite: &'static MethodSuite,
    backing: Box<dyn Array2>,
}

impl A2 {
    /// Wrap `backing` in a handle owned by `suite`.
    ///
    /// Suites call this from their `create` entries.
    pub fn new<B: Array2>(suite: &'static MethodSuite, backing: B) -> Self {
        Self {
            suite,
            backing: Box::new(backing),
        }
    }

    /// The suite that created this handle.
    pub fn suite(&self) -> &'static MethodSuite {
        self.suite
    }

    /// The backing as a capability object.
    pub fn as_array2(&self) -> &dyn Array2 {
        &*self.backing
    }

    /// The backing as a mutable capability object.
    pub fn as_array2_mut(&mut self) -> &mut dyn Array2 {
        &mut *self.backing
    }

    /// Current dimensions, slot size, and block side.
    pub fn shape(&self) -> Shape {
        self.backing.shape()
    }

    /// The concrete backing. Fatal if this handle holds a different type.
    #[track_caller]
    pub fn backing<B: Array2>(&self) -> &B {
        match self.backing.downcast_ref::<B>() {
            Some(b) => b,
            None => foreign_handle::<B>(),
        }
    }

    /// The concrete backing, mutably. Fatal if this handle holds a different
    /// type.
    #[track_caller]
    pub fn backing_mut<B: Array2>(&mut self) -> &mut B {
        match self.backing.downcast_mut::<B>() {
            Some(b) => b,
            None => foreign_handle::<B>(),
        }
    }

    /// Width through the owning suite.
    pub fn width(&self) -> usize {
        (self.suite.width)(self)
    }

    /// Height through the owning suite.
    pub fn height(&self) -> usize {
        (self.suite.height)(self)
    }

    /// Slot size through the owning suite.
    pub fn element_size(&self) -> usize {
        (self.suite.element_size)(self)
    }

    /// Block side through the owning suite.
    pub fn block_size(&self) -> usize {
        (self.suite.block_size)(self)
    }

    /// Slot at `(col, row)` through the owning suite.
    ///
    /// # Panics
    ///
    /// If the cell is out of bounds.
    pub fn at(&mut self, col: usize, row: usize) -> &mut [u8] {
        (self.suite.at)(self, col, row)
    }

    /// Full traversal in `order`, if the owning suite offers it.
    pub fn map(&mut self, order: Order, apply: Apply<'_>) -> Result<(), MethodError> {
        let entry = self.suite.map(order)?;
        entry(self, apply);
        Ok(())
    }

    /// Reduced traversal in `order`, if the owning suite offers it.
    pub fn small_map(&mut self, order: Order, apply: SmallApply<'_>) -> Result<(), MethodError> {
        let entry = self.suite.small_map(order)?;
        entry(self, apply);
        Ok(())
    }

    /// Full traversal in the owning suite's default order.
    pub fn map_default(&mut self, apply: Apply<'_>) -> Result<(), MethodError> {
        let entry = self.suite.default_map()?;
        entry(self, apply);
        Ok(())
    }

    /// Reduced traversal in the owning suite's default order.
    pub fn small_map_default(&mut self, apply: SmallApply<'_>) -> Result<(), MethodError> {
        let entry = self.suite.default_small_map()?;
        entry(self, apply);
        Ok(())
    }

    /// Release the array through the owning suite.
    pub fn destroy(self) {
        (self.suite.destroy)(self)
    }
}

impl fmt::Debug for A2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("A2")
            .field("shape", &self.backing.shape())
            .field("suite", self.suite)
            .finish()
    }
}

#[cold]
#[track_caller]
fn foreign_handle<B: Array2>() -> ! {
    let err = MethodError::ForeignHandle {
        expected: std::any::type_name::<B>(),
    };
    log::error!("{err}");
    panic!("{err}")
}
