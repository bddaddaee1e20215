//! Deterministic fills driven by a seeded RNG.

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tessel_core::Array2;

/// Fill every slot with bytes from a ChaCha8 stream seeded with `seed`.
///
/// Cells are filled in row-major order, so two arrays of the same shape
/// filled with the same seed hold identical logical contents regardless of
/// their backing.
pub fn fill_seeded(array: &mut dyn Array2, seed: u64) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    for row in 0..array.height() {
        for col in 0..array.width() {
            rng.fill_bytes(array.at_mut(col, row));
        }
    }
}

/// Copy every logical cell of `array` into a row-major byte vector.
pub fn snapshot(array: &dyn Array2) -> Vec<u8> {
    let mut out = Vec::with_capacity(array.width() * array.height() * array.element_size());
    for row in 0..array.height() {
        for col in 0..array.width() {
            out.extend_from_slice(array.at(col, row));
        }
    }
    out
}
