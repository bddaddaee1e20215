//! Array shape and index arithmetic shared by every backing.

/// Dimensions and slot layout of a 2D array.
///
/// A `Shape` is what traversal callbacks receive for querying the array
/// being visited: it is `Copy`, so holding one never borrows the array.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Shape {
    /// Number of columns.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
    /// Size of each slot in bytes.
    pub element_size: usize,
    /// Side of a storage block; 1 for unblocked layouts.
    pub block_size: usize,
}

impl Shape {
    /// Total number of logical cells (`width * height`).
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Whether `(col, row)` addresses a logical cell.
    pub fn contains(&self, col: usize, row: usize) -> bool {
        col < self.width && row < self.height
    }
}

/// Linear index of `(col, row)` in a row-major layout of the given width.
#[inline]
pub fn row_major_index(col: usize, row: usize, width: usize) -> usize {
    row * width + col
}

/// Integer division rounding up.
///
/// # Panics
///
/// Panics if `d == 0`.
#[inline]
pub fn ceil_div(n: usize, d: usize) -> usize {
    n.div_ceil(d)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ceil_div_rounds_up_partial_blocks() {
        assert_eq!(ceil_div(5, 2), 3);
        assert_eq!(ceil_div(4, 2), 2);
        assert_eq!(ceil_div(0, 7), 0);
        assert_eq!(ceil_div(1, 128), 1);
    }

    #[test]
    fn row_major_index_varies_column_fastest() {
        assert_eq!(row_major_index(0, 0, 5), 0);
        assert_eq!(row_major_index(4, 0, 5), 4);
        assert_eq!(row_major_index(0, 1, 5), 5);
        assert_eq!(row_major_index(4, 2, 5), 14);
    }

    #[test]
    fn contains_excludes_edges() {
        let shape = Shape {
            width: 5,
            height: 3,
            element_size: 4,
            block_size: 1,
        };
        assert!(shape.contains(4, 2));
        assert!(!shape.contains(5, 0));
        assert!(!shape.contains(0, 3));
        assert_eq!(shape.cell_count(), 15);
    }

    #[test]
    fn empty_shape_contains_nothing() {
        let shape = Shape {
            width: 0,
            height: 4,
            element_size: 1,
            block_size: 1,
        };
        assert!(!shape.contains(0, 0));
        assert_eq!(shape.cell_count(), 0);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn ceil_div_is_the_least_covering_multiple(n in 0usize..100_000, d in 1usize..1_000) {
                let q = ceil_div(n, d);
                prop_assert!(q * d >= n);
                prop_assert!(q == 0 || (q - 1) * d < n);
            }

            #[test]
            fn row_major_index_is_a_bijection(w in 1usize..40, h in 1usize..40) {
                let mut seen = vec![false; w * h];
                for row in 0..h {
                    for col in 0..w {
                        let i = row_major_index(col, row, w);
                        prop_assert!(i < w * h);
                        prop_assert!(!seen[i]);
                        seen[i] = true;
                    }
                }
            }
        }
    }
}
