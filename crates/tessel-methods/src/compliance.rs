//! Method suite compliance helpers.
//!
//! Every suite must satisfy the same table contract regardless of backing.
//! Reused by the plain and blocked test modules.

use tessel_core::Order;
use tessel_test_utils::{
    block_major_order, col_major_order, fill_labels, get_u32, label, put_u32, row_major_order,
};

use crate::suite::MethodSuite;

const SHAPES: [(usize, usize); 5] = [(1, 1), (5, 3), (3, 5), (17, 9), (1, 12)];

fn expected_order(order: Order, w: usize, h: usize, b: usize) -> Vec<(usize, usize)> {
    match order {
        Order::RowMajor => row_major_order(w, h),
        Order::ColMajor => col_major_order(w, h),
        Order::BlockMajor => block_major_order(w, h, b),
    }
}

/// Assert that created handles report their shape and owning suite.
pub fn assert_create_reports_shape(suite: &'static MethodSuite) {
    for (w, h) in SHAPES {
        let a = (suite.create)(w, h, 8);
        assert_eq!((suite.width)(&a), w);
        assert_eq!((suite.height)(&a), h);
        assert_eq!((suite.element_size)(&a), 8);
        assert!((suite.block_size)(&a) >= 1);
        assert!(std::ptr::eq(a.suite(), suite));
        (suite.destroy)(a);
    }
}

/// Assert that `at` gives each cell its own slot.
pub fn assert_at_distinct(suite: &'static MethodSuite) {
    let (w, h) = (7, 4);
    let mut a = (suite.create_with_block_hint)(w, h, 4, 3);
    for row in 0..h {
        for col in 0..w {
            put_u32((suite.at)(&mut a, col, row), label(col, row, w));
        }
    }
    for row in 0..h {
        for col in 0..w {
            assert_eq!(get_u32((suite.at)(&mut a, col, row)), label(col, row, w));
        }
    }
    a.destroy();
}

/// Assert that each offered full traversal visits every cell once in its
/// order, with the array's own shape and the cell's own slot.
pub fn assert_full_traversals(suite: &'static MethodSuite) {
    for (w, h) in SHAPES {
        let mut a = (suite.create_with_block_hint)(w, h, 4, 2);
        fill_labels(a.as_array2_mut());
        let shape = a.shape();
        let b = shape.block_size;
        for order in suite.supported_orders() {
            let mut seen = Vec::new();
            a.map(order, &mut |col, row, s, slot| {
                assert_eq!(*s, shape);
                assert_eq!(get_u32(slot), label(col, row, w));
                seen.push((col, row));
            })
            .unwrap();
            assert_eq!(seen, expected_order(order, w, h, b), "{order} order");
        }
        a.destroy();
    }
}

/// Assert that absent traversals are reported and that reduced entries are
/// present exactly when full entries are.
pub fn assert_absent_orders_reported(suite: &'static MethodSuite) {
    for order in Order::ALL {
        assert_eq!(suite.map(order).is_ok(), suite.small_map(order).is_ok());
        let mut a = (suite.create)(2, 2, 4);
        let result = a.map(order, &mut |_, _, _, _| {});
        assert_eq!(result.is_ok(), suite.supports(order));
        a.destroy();
    }
    assert_eq!(suite.map_default.is_some(), suite.small_map_default.is_some());
}

/// Assert that reduced traversals hand out the same slots in the same order
/// as their full counterparts, including the defaults.
pub fn assert_small_matches_full(suite: &'static MethodSuite) {
    let (w, h) = (6, 5);
    let mut a = (suite.create_with_block_hint)(w, h, 4, 4);
    fill_labels(a.as_array2_mut());
    let mut pairs: Vec<(Vec<u32>, Vec<u32>)> = Vec::new();
    for order in suite.supported_orders() {
        let mut full = Vec::new();
        a.map(order, &mut |_, _, _, slot| full.push(get_u32(slot)))
            .unwrap();
        let mut small = Vec::new();
        a.small_map(order, &mut |slot| small.push(get_u32(slot)))
            .unwrap();
        pairs.push((full, small));
    }
    if suite.map_default.is_some() {
        let mut full = Vec::new();
        a.map_default(&mut |_, _, _, slot| full.push(get_u32(slot)))
            .unwrap();
        let mut small = Vec::new();
        a.small_map_default(&mut |slot| small.push(get_u32(slot)))
            .unwrap();
        pairs.push((full, small));
    }
    for (full, small) in pairs {
        assert_eq!(full.len(), w * h);
        assert_eq!(full, small);
    }
    a.destroy();
}

/// Assert that the default traversal matches one of the offered orders.
pub fn assert_default_is_offered(suite: &'static MethodSuite) {
    let Some(default) = suite.map_default else {
        return;
    };
    assert!(
        suite
            .supported_orders()
            .iter()
            .any(|&o| suite.map(o).ok().map(|f| f as usize) == Some(default as usize)),
        "default traversal is not one of the offered orders"
    );
}

/// Assert that writes made during a traversal persist.
pub fn assert_traversal_writes_persist(suite: &'static MethodSuite) {
    let (w, h) = (9, 4);
    let mut a = (suite.create)(w, h, 4);
    a.map_default(&mut |col, row, s, slot| put_u32(slot, label(col, row, s.width)))
        .unwrap();
    for row in 0..h {
        for col in 0..w {
            assert_eq!(get_u32(a.at(col, row)), label(col, row, w));
        }
    }
    a.destroy();
}

/// Run every suite compliance check.
pub fn run_suite_compliance(suite: &'static MethodSuite) {
    assert_create_reports_shape(suite);
    assert_at_distinct(suite);
    assert_full_traversals(suite);
    assert_absent_orders_reported(suite);
    assert_small_matches_full(suite);
    assert_default_is_offered(suite);
    assert_traversal_writes_persist(suite);
}
