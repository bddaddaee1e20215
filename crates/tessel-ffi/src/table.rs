//! The C method tables.
//!
//! [`TesselMethods`] mirrors [`MethodSuite`] entry for entry, in the same
//! order, with nullable C function pointers. Arrays are `u64` handles from
//! the per-thread registry; sizes and coordinates are `int`.

use std::ffi::c_void;
use std::mem::{offset_of, size_of};

use tessel_core::Order;
use tessel_methods::{MethodSuite, BLOCKED, PLAIN};

use crate::error::FfiError;
use crate::guard::guard;
use crate::handle::NULL_HANDLE;
use crate::registry;

/// Full traversal callback: `apply(col, row, array, elem, cl)`.
///
/// `array` is the traversed handle; its shape queries may be called from
/// inside the callback, its `at` may not.
pub type TesselApplyFn =
    Option<unsafe extern "C" fn(i32, i32, u64, *mut c_void, *mut c_void)>;

/// Reduced traversal callback: `apply(elem, cl)`.
pub type TesselSmallApplyFn = Option<unsafe extern "C" fn(*mut c_void, *mut c_void)>;

/// A full traversal entry: `map(handle, apply, cl)`.
pub type TesselMapFn = Option<unsafe extern "C" fn(u64, TesselApplyFn, *mut c_void)>;

/// A reduced traversal entry: `small_map(handle, apply, cl)`.
pub type TesselSmallMapFn = Option<unsafe extern "C" fn(u64, TesselSmallApplyFn, *mut c_void)>;

/// A method table as seen from C. Null traversal entries are unsupported.
#[repr(C)]
pub struct TesselMethods {
    /// `create(width, height, size)`.
    pub create: Option<unsafe extern "C" fn(i32, i32, i32) -> u64>,
    /// `create_with_block_hint(width, height, size, block_hint)`.
    pub create_with_block_hint: Option<unsafe extern "C" fn(i32, i32, i32, i32) -> u64>,
    /// `destroy(&handle)`; zeroes the handle.
    pub destroy: Option<unsafe extern "C" fn(*mut u64)>,
    /// Width in cells.
    pub width: Option<unsafe extern "C" fn(u64) -> i32>,
    /// Height in cells.
    pub height: Option<unsafe extern "C" fn(u64) -> i32>,
    /// Slot size in bytes.
    pub size: Option<unsafe extern "C" fn(u64) -> i32>,
    /// Block side, 1 when unblocked.
    pub block_size: Option<unsafe extern "C" fn(u64) -> i32>,
    /// `at(handle, col, row)`: pointer to the slot.
    pub at: Option<unsafe extern "C" fn(u64, i32, i32) -> *mut c_void>,
    /// Row-major traversal.
    pub map_row_major: TesselMapFn,
    /// Column-major traversal.
    pub map_col_major: TesselMapFn,
    /// Block-major traversal.
    pub map_block_major: TesselMapFn,
    /// Default traversal.
    pub map_default: TesselMapFn,
    /// Reduced row-major traversal.
    pub small_map_row_major: TesselSmallMapFn,
    /// Reduced column-major traversal.
    pub small_map_col_major: TesselSmallMapFn,
    /// Reduced block-major traversal.
    pub small_map_block_major: TesselSmallMapFn,
    /// Reduced default traversal.
    pub small_map_default: TesselSmallMapFn,
}

const _: () = assert!(size_of::<TesselMethods>() == 16 * size_of::<usize>());
const _: () = assert!(offset_of!(TesselMethods, at) == 7 * size_of::<usize>());
const _: () = assert!(offset_of!(TesselMethods, map_row_major) == 8 * size_of::<usize>());
const _: () = assert!(offset_of!(TesselMethods, small_map_default) == 15 * size_of::<usize>());

/// Binds generic entries to one Rust suite.
trait Suite {
    fn suite() -> &'static MethodSuite;
}

struct Plain;
struct Blocked;

impl Suite for Plain {
    fn suite() -> &'static MethodSuite {
        &PLAIN
    }
}

impl Suite for Blocked {
    fn suite() -> &'static MethodSuite {
        &BLOCKED
    }
}

static PLAIN_TABLE: TesselMethods = TesselMethods {
    create: Some(create::<Plain>),
    create_with_block_hint: Some(create_with_block_hint::<Plain>),
    destroy: Some(destroy::<Plain>),
    width: Some(width::<Plain>),
    height: Some(height::<Plain>),
    size: Some(size::<Plain>),
    block_size: Some(block_size::<Plain>),
    at: Some(at::<Plain>),
    map_row_major: Some(map_row_major::<Plain>),
    map_col_major: Some(map_col_major::<Plain>),
    map_block_major: None,
    map_default: Some(map_default::<Plain>),
    small_map_row_major: Some(small_map_row_major::<Plain>),
    small_map_col_major: Some(small_map_col_major::<Plain>),
    small_map_block_major: None,
    small_map_default: Some(small_map_default::<Plain>),
};

static BLOCKED_TABLE: TesselMethods = TesselMethods {
    create: Some(create::<Blocked>),
    create_with_block_hint: Some(create_with_block_hint::<Blocked>),
    destroy: Some(destroy::<Blocked>),
    width: Some(width::<Blocked>),
    height: Some(height::<Blocked>),
    size: Some(size::<Blocked>),
    block_size: Some(block_size::<Blocked>),
    at: Some(at::<Blocked>),
    map_row_major: None,
    map_col_major: None,
    map_block_major: Some(map_block_major::<Blocked>),
    map_default: Some(map_default::<Blocked>),
    small_map_row_major: None,
    small_map_col_major: None,
    small_map_block_major: Some(small_map_block_major::<Blocked>),
    small_map_default: Some(small_map_default::<Blocked>),
};

/// The plain (row-major) method table.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tessel_methods_plain() -> *const TesselMethods {
    &PLAIN_TABLE
}

/// The blocked method table.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tessel_methods_blocked() -> *const TesselMethods {
    &BLOCKED_TABLE
}

/// Arrays currently alive on the calling thread. Zero once every created
/// array has been destroyed.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tessel_live_arrays() -> usize {
    registry::live()
}

fn dimension(name: &'static str, value: i32) -> Result<usize, FfiError> {
    usize::try_from(value).map_err(|_| FfiError::Negative { name, value })
}

fn positive(name: &'static str, value: i32) -> Result<usize, FfiError> {
    match usize::try_from(value) {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(FfiError::NotPositive { name, value }),
    }
}

// Dimensions originate from `i32` arguments, so they convert back losslessly.
fn to_c(value: usize) -> i32 {
    value as i32
}

#[allow(unsafe_code)]
unsafe extern "C" fn create<S: Suite>(width: i32, height: i32, size: i32) -> u64 {
    guard(|| {
        let a2 = (S::suite().create)(
            dimension("width", width)?,
            dimension("height", height)?,
            positive("size", size)?,
        );
        Ok(registry::insert(a2))
    })
}

#[allow(unsafe_code)]
unsafe extern "C" fn create_with_block_hint<S: Suite>(
    width: i32,
    height: i32,
    size: i32,
    block_hint: i32,
) -> u64 {
    guard(|| {
        let a2 = (S::suite().create_with_block_hint)(
            dimension("width", width)?,
            dimension("height", height)?,
            positive("size", size)?,
            positive("block_hint", block_hint)?,
        );
        Ok(registry::insert(a2))
    })
}

#[allow(unsafe_code)]
unsafe extern "C" fn destroy<S: Suite>(handle: *mut u64) {
    guard(|| {
        if handle.is_null() {
            return Err(FfiError::Null { name: "handle" });
        }
        // SAFETY: non-null and points to a handle per caller contract.
        let h = unsafe { *handle };
        let a2 = registry::remove(h, S::suite())?;
        a2.destroy();
        // SAFETY: as above.
        unsafe { *handle = NULL_HANDLE };
        Ok(())
    })
}

#[allow(unsafe_code)]
unsafe extern "C" fn width<S: Suite>(handle: u64) -> i32 {
    guard(|| Ok(to_c(registry::lookup(handle, S::suite())?.shape().width)))
}

#[allow(unsafe_code)]
unsafe extern "C" fn height<S: Suite>(handle: u64) -> i32 {
    guard(|| Ok(to_c(registry::lookup(handle, S::suite())?.shape().height)))
}

#[allow(unsafe_code)]
unsafe extern "C" fn size<S: Suite>(handle: u64) -> i32 {
    guard(|| Ok(to_c(registry::lookup(handle, S::suite())?.shape().element_size)))
}

#[allow(unsafe_code)]
unsafe extern "C" fn block_size<S: Suite>(handle: u64) -> i32 {
    guard(|| Ok(to_c(registry::lookup(handle, S::suite())?.shape().block_size)))
}

#[allow(unsafe_code)]
unsafe extern "C" fn at<S: Suite>(handle: u64, col: i32, row: i32) -> *mut c_void {
    guard(|| {
        let (col, row) = (dimension("col", col)?, dimension("row", row)?);
        let entry = registry::lookup(handle, S::suite())?;
        let mut a2 = entry.array_mut(handle)?;
        // The slot lives in the registry entry, which outlives this borrow.
        Ok(a2.at(col, row).as_mut_ptr().cast())
    })
}

#[allow(unsafe_code)]
fn run_map<S: Suite>(
    handle: u64,
    order: Option<Order>,
    apply: TesselApplyFn,
    cl: *mut c_void,
) -> Result<(), FfiError> {
    let apply = apply.ok_or(FfiError::Null { name: "apply" })?;
    let suite = S::suite();
    let entry = registry::lookup(handle, suite)?;
    let map = match order {
        Some(order) => suite.map(order)?,
        None => suite.default_map()?,
    };
    let mut a2 = entry.array_mut(handle)?;
    map(&mut a2, &mut |col, row, _, slot| {
        // SAFETY: `apply` is a valid callback per caller contract; `slot`
        // stays valid for the call.
        unsafe { apply(to_c(col), to_c(row), handle, slot.as_mut_ptr().cast(), cl) }
    });
    Ok(())
}

#[allow(unsafe_code)]
fn run_small_map<S: Suite>(
    handle: u64,
    order: Option<Order>,
    apply: TesselSmallApplyFn,
    cl: *mut c_void,
) -> Result<(), FfiError> {
    let apply = apply.ok_or(FfiError::Null { name: "apply" })?;
    let suite = S::suite();
    let entry = registry::lookup(handle, suite)?;
    let map = match order {
        Some(order) => suite.small_map(order)?,
        None => suite.default_small_map()?,
    };
    let mut a2 = entry.array_mut(handle)?;
    // SAFETY: as in `run_map`.
    map(&mut a2, &mut |slot| unsafe { apply(slot.as_mut_ptr().cast(), cl) });
    Ok(())
}

#[allow(unsafe_code)]
unsafe extern "C" fn map_row_major<S: Suite>(h: u64, apply: TesselApplyFn, cl: *mut c_void) {
    guard(|| run_map::<S>(h, Some(Order::RowMajor), apply, cl))
}

#[allow(unsafe_code)]
unsafe extern "C" fn map_col_major<S: Suite>(h: u64, apply: TesselApplyFn, cl: *mut c_void) {
    guard(|| run_map::<S>(h, Some(Order::ColMajor), apply, cl))
}

#[allow(unsafe_code)]
unsafe extern "C" fn map_block_major<S: Suite>(h: u64, apply: TesselApplyFn, cl: *mut c_void) {
    guard(|| run_map::<S>(h, Some(Order::BlockMajor), apply, cl))
}

#[allow(unsafe_code)]
unsafe extern "C" fn map_default<S: Suite>(h: u64, apply: TesselApplyFn, cl: *mut c_void) {
    guard(|| run_map::<S>(h, None, apply, cl))
}

#[allow(unsafe_code)]
unsafe extern "C" fn small_map_row_major<S: Suite>(
    h: u64,
    apply: TesselSmallApplyFn,
    cl: *mut c_void,
) {
    guard(|| run_small_map::<S>(h, Some(Order::RowMajor), apply, cl))
}

#[allow(unsafe_code)]
unsafe extern "C" fn small_map_col_major<S: Suite>(
    h: u64,
    apply: TesselSmallApplyFn,
    cl: *mut c_void,
) {
    guard(|| run_small_map::<S>(h, Some(Order::ColMajor), apply, cl))
}

#[allow(unsafe_code)]
unsafe extern "C" fn small_map_block_major<S: Suite>(
    h: u64,
    apply: TesselSmallApplyFn,
    cl: *mut c_void,
) {
    guard(|| run_small_map::<S>(h, Some(Order::BlockMajor), apply, cl))
}

#[allow(unsafe_code)]
unsafe extern "C" fn small_map_default<S: Suite>(
    h: u64,
    apply: TesselSmallApplyFn,
    cl: *mut c_void,
) {
    guard(|| run_small_map::<S>(h, None, apply, cl))
}

#[cfg(test)]
#[allow(unsafe_code)]
mod tests {
    use super::*;
    use tessel_test_utils::{block_major_order, col_major_order, row_major_order};

    fn plain() -> &'static TesselMethods {
        // SAFETY: points to a static.
        unsafe { &*tessel_methods_plain() }
    }

    fn blocked() -> &'static TesselMethods {
        // SAFETY: points to a static.
        unsafe { &*tessel_methods_blocked() }
    }

    struct Visits {
        cells: Vec<(i32, i32)>,
        widths: Vec<i32>,
        width_fn: unsafe extern "C" fn(u64) -> i32,
    }

    unsafe extern "C" fn record(col: i32, row: i32, array: u64, _elem: *mut c_void, cl: *mut c_void) {
        // SAFETY: `cl` is the `Visits` passed by the test.
        let visits = unsafe { &mut *cl.cast::<Visits>() };
        visits.cells.push((col, row));
        // SAFETY: querying the traversed array's shape is allowed.
        visits.widths.push(unsafe { (visits.width_fn)(array) });
    }

    unsafe extern "C" fn write_index(elem: *mut c_void, cl: *mut c_void) {
        // SAFETY: `cl` is a `u32` counter and `elem` a slot of at least 4 bytes.
        unsafe {
            let next = &mut *cl.cast::<u32>();
            elem.cast::<u32>().write_unaligned(*next);
            *next += 1;
        }
    }

    fn visit(table: &TesselMethods, entry: TesselMapFn, h: u64) -> Vec<(i32, i32)> {
        let mut visits = Visits {
            cells: Vec::new(),
            widths: Vec::new(),
            width_fn: table.width.unwrap(),
        };
        // SAFETY: valid handle, callback and closure.
        unsafe { entry.unwrap()(h, Some(record), (&mut visits as *mut Visits).cast()) };
        let w = unsafe { table.width.unwrap()(h) };
        assert!(visits.widths.iter().all(|&vw| vw == w));
        visits.cells
    }

    fn as_c(order: Vec<(usize, usize)>) -> Vec<(i32, i32)> {
        order.into_iter().map(|(c, r)| (c as i32, r as i32)).collect()
    }

    #[test]
    fn null_entries_mirror_suites() {
        for (table, suite) in [(plain(), &PLAIN), (blocked(), &BLOCKED)] {
            assert_eq!(table.map_row_major.is_some(), suite.map_row_major.is_some());
            assert_eq!(table.map_col_major.is_some(), suite.map_col_major.is_some());
            assert_eq!(table.map_block_major.is_some(), suite.map_block_major.is_some());
            assert_eq!(table.map_default.is_some(), suite.map_default.is_some());
            assert_eq!(
                table.small_map_row_major.is_some(),
                suite.small_map_row_major.is_some()
            );
            assert_eq!(
                table.small_map_col_major.is_some(),
                suite.small_map_col_major.is_some()
            );
            assert_eq!(
                table.small_map_block_major.is_some(),
                suite.small_map_block_major.is_some()
            );
            assert_eq!(
                table.small_map_default.is_some(),
                suite.small_map_default.is_some()
            );
        }
    }

    #[test]
    fn plain_table_round_trip() {
        let t = plain();
        unsafe {
            let mut h = t.create.unwrap()(5, 3, 4);
            assert_eq!(t.width.unwrap()(h), 5);
            assert_eq!(t.height.unwrap()(h), 3);
            assert_eq!(t.size.unwrap()(h), 4);
            assert_eq!(t.block_size.unwrap()(h), 1);
            t.at.unwrap()(h, 4, 2).cast::<u32>().write_unaligned(77);
            assert_eq!(t.at.unwrap()(h, 4, 2).cast::<u32>().read_unaligned(), 77);

            assert_eq!(visit(t, t.map_row_major, h), as_c(row_major_order(5, 3)));
            assert_eq!(visit(t, t.map_col_major, h), as_c(col_major_order(5, 3)));
            assert_eq!(visit(t, t.map_default, h), as_c(row_major_order(5, 3)));

            t.destroy.unwrap()(&mut h);
            assert_eq!(h, NULL_HANDLE);
        }
        assert_eq!(tessel_live_arrays(), 0);
    }

    #[test]
    fn blocked_table_round_trip() {
        let t = blocked();
        unsafe {
            let mut h = t.create_with_block_hint.unwrap()(5, 3, 4, 2);
            assert_eq!(t.block_size.unwrap()(h), 2);
            assert_eq!(visit(t, t.map_block_major, h), as_c(block_major_order(5, 3, 2)));
            assert_eq!(visit(t, t.map_default, h), as_c(block_major_order(5, 3, 2)));
            t.destroy.unwrap()(&mut h);
            assert_eq!(h, NULL_HANDLE);

            let mut big = t.create.unwrap()(300, 2, 4);
            assert_eq!(t.block_size.unwrap()(big), 128);
            t.destroy.unwrap()(&mut big);
        }
    }

    #[test]
    fn small_map_hands_out_slots_in_default_order() {
        for t in [plain(), blocked()] {
            unsafe {
                let mut h = t.create_with_block_hint.unwrap()(4, 4, 4, 2);
                let mut next = 0u32;
                t.small_map_default.unwrap()(h, Some(write_index), (&mut next as *mut u32).cast());
                assert_eq!(next, 16);
                let order = visit(t, t.map_default, h);
                for (i, &(c, r)) in order.iter().enumerate() {
                    let v = t.at.unwrap()(h, c, r).cast::<u32>().read_unaligned();
                    assert_eq!(v, i as u32);
                }
                t.destroy.unwrap()(&mut h);
            }
        }
    }

    #[test]
    fn argument_checks() {
        assert_eq!(
            dimension("width", -1),
            Err(FfiError::Negative {
                name: "width",
                value: -1
            })
        );
        assert_eq!(dimension("height", 0), Ok(0));
        assert_eq!(
            positive("size", 0),
            Err(FfiError::NotPositive {
                name: "size",
                value: 0
            })
        );
        assert_eq!(positive("block_hint", 3), Ok(3));
    }

    #[test]
    fn traversal_errors_are_reported_before_aborting() {
        let h = registry::insert((PLAIN.create)(2, 2, 4));
        assert_eq!(
            run_map::<Plain>(h, Some(Order::RowMajor), None, std::ptr::null_mut()),
            Err(FfiError::Null { name: "apply" })
        );
        assert_eq!(
            run_map::<Blocked>(h, None, Some(record), std::ptr::null_mut()),
            Err(FfiError::ForeignHandle { handle: h })
        );
        assert!(matches!(
            run_small_map::<Plain>(h, Some(Order::BlockMajor), Some(write_index), std::ptr::null_mut()),
            Err(FfiError::Method(_))
        ));
        assert!(registry::remove(h, &PLAIN).is_ok());
    }

    const CHILD_ENV: &str = "TESSEL_FATAL_CHILD";

    /// Re-run `test` alone in a child process with `CHILD_ENV` set, and
    /// require that it aborts with `message` on stderr.
    fn assert_aborts_in_child(test: &str, message: &str) {
        let output = std::process::Command::new(std::env::current_exe().unwrap())
            .args([test, "--exact", "--nocapture", "--test-threads=1"])
            .env(CHILD_ENV, "1")
            .output()
            .unwrap();
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(!output.status.success(), "child exited cleanly: {stderr}");
        assert!(stderr.contains(message), "unexpected stderr: {stderr}");
    }

    #[test]
    fn destroyed_handle_aborts() {
        if std::env::var_os(CHILD_ENV).is_none() {
            assert_aborts_in_child(
                "table::tests::destroyed_handle_aborts",
                "tessel: fatal: invalid array handle",
            );
            return;
        }
        let t = plain();
        unsafe {
            let mut h = t.create.unwrap()(2, 2, 4);
            let stale = h;
            t.destroy.unwrap()(&mut h);
            t.width.unwrap()(stale);
        }
    }

    #[test]
    fn negative_width_aborts() {
        if std::env::var_os(CHILD_ENV).is_none() {
            assert_aborts_in_child(
                "table::tests::negative_width_aborts",
                "tessel: fatal: width must not be negative, got -3",
            );
            return;
        }
        unsafe {
            blocked().create.unwrap()(-3, 2, 4);
        }
    }
}
