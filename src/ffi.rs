//! C ABI entry point, matching `include/swish_qsort.h`.

use std::cmp::Ordering;
use std::ffi::{c_int, c_void};
use std::slice;

use crate::bytes;

/// `typedef int cmp_t (const void *, const void *);`
pub type CmpFn = unsafe extern "C" fn(*const c_void, *const c_void) -> c_int;

/// Sorts `n` elements of `es` bytes each, starting at `a`, ordered by `cmp`.
///
/// Not stable. `cmp` returns a negative value, zero or a positive value when its first argument
/// is less than, equal to or greater than its second argument. It is always handed pointers to
/// elements inside the array.
///
/// Does nothing if `a` is null, `n < 2`, `es == 0` or `n * es` overflows.
///
/// # Safety
///
/// - `a` must be valid for reads and writes of `n * es` bytes and not be accessed by anything
///   else for the duration of the call.
/// - `cmp` must not write to the elements it is given and must not unwind.
#[no_mangle]
pub unsafe extern "C" fn swish_qsort(a: *mut c_void, n: usize, es: usize, cmp: CmpFn) {
    if a.is_null() || n < 2 || es == 0 {
        return;
    }

    let Some(len) = n.checked_mul(es) else {
        return;
    };

    // SAFETY: The caller guarantees that `a` points to `n * es` bytes of exclusively owned memory.
    let buf = unsafe { slice::from_raw_parts_mut(a as *mut u8, len) };

    bytes::sort_bytes(buf, es, |x, y| {
        // SAFETY: `x` and `y` are element sized sub-slices of the caller provided array, which is
        // exactly what `cmp` expects to be handed.
        let res = unsafe { cmp(x.as_ptr() as *const c_void, y.as_ptr() as *const c_void) };
        res.cmp(&0)
    });
}

/// Maps an [`Ordering`] onto the `-1`, `0`, `1` convention of C comparators.
#[inline]
pub fn ordering_to_c_int(ord: Ordering) -> c_int {
    ord as c_int
}
