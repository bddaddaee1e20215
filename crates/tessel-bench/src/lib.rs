//! Benchmark profiles for Tessel.
//!
//! - [`image_profile`]: a seeded 1024x768 array of 4-byte pixels
//! - [`profile`]: a seeded array of any shape from any suite

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use tessel_methods::{MethodError, MethodSuite, A2};
use tessel_test_utils::fill_seeded;

/// Width of [`image_profile`].
pub const IMAGE_WIDTH: usize = 1024;
/// Height of [`image_profile`].
pub const IMAGE_HEIGHT: usize = 768;

/// A `width x height` array from `suite`, filled deterministically from `seed`.
pub fn profile(
    suite: &'static MethodSuite,
    width: usize,
    height: usize,
    element_size: usize,
    seed: u64,
) -> A2 {
    let mut a = (suite.create)(width, height, element_size);
    fill_seeded(a.as_array2_mut(), seed);
    a
}

/// The reference image: 1024x768 cells of 4 bytes.
pub fn image_profile(suite: &'static MethodSuite, seed: u64) -> A2 {
    profile(suite, IMAGE_WIDTH, IMAGE_HEIGHT, 4, seed)
}

/// Sum of every byte, read through the reduced default traversal.
pub fn byte_sum(a: &mut A2) -> Result<u64, MethodError> {
    let mut sum = 0u64;
    a.small_map_default(&mut |slot| {
        sum += slot.iter().map(|&b| u64::from(b)).sum::<u64>();
    })?;
    Ok(sum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessel_methods::{BLOCKED, PLAIN};

    #[test]
    fn profiles_are_backing_independent() {
        let mut p = profile(&PLAIN, 33, 17, 4, 9);
        let mut b = profile(&BLOCKED, 33, 17, 4, 9);
        assert_eq!(byte_sum(&mut p).unwrap(), byte_sum(&mut b).unwrap());
        assert_ne!(byte_sum(&mut p).unwrap(), 0);
    }

    #[test]
    fn byte_sum_reports_missing_default() {
        let mut suite = PLAIN;
        suite.small_map_default = None;
        let suite: &'static MethodSuite = Box::leak(Box::new(suite));
        let mut a = A2::new(suite, tessel_array::RowMajorArray::new(2, 2, 1));
        assert_eq!(byte_sum(&mut a), Err(MethodError::NoDefaultTraversal));
    }
}
