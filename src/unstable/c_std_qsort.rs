//! The platform libc `qsort`, as a point of comparison.

use std::any::Any;
use std::cmp::Ordering;
use std::ffi::c_void;
use std::mem;
use std::panic::{self, AssertUnwindSafe};

extern "C" {
    fn c_std_qsort_by(
        data: *mut c_void,
        len: usize,
        elem_size: usize,
        cmp_fn: unsafe extern "C" fn(*const c_void, *const c_void, *mut c_void) -> i8,
        cmp_fn_ctx: *mut c_void,
    );
}

sort_impl!("c_std_qsort_unstable");

struct CmpCtx<F> {
    compare: F,
    panic_payload: Option<Box<dyn Any + Send>>,
}

unsafe extern "C" fn rust_fn_cmp<T, F: FnMut(&T, &T) -> Ordering>(
    a: *const c_void,
    b: *const c_void,
    ctx: *mut c_void,
) -> i8 {
    // SAFETY: `ctx` is the `CmpCtx<F>` passed to `c_std_qsort_by` below, and qsort hands us
    // pointers to elements of the `[T]` being sorted.
    let ctx = unsafe { &mut *(ctx as *mut CmpCtx<F>) };
    let (a, b) = unsafe { (&*(a as *const T), &*(b as *const T)) };

    // Unwinding through C is not an option. Remember the first panic and let qsort finish with
    // meaningless results.
    if ctx.panic_payload.is_some() {
        return 0;
    }

    match panic::catch_unwind(AssertUnwindSafe(|| (ctx.compare)(a, b))) {
        Ok(ord) => ord as i8,
        Err(err) => {
            ctx.panic_payload = Some(err);
            0
        }
    }
}

pub fn sort<T: Ord>(data: &mut [T]) {
    sort_by(data, |a, b| a.cmp(b));
}

pub fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(data: &mut [T], compare: F) {
    if mem::size_of::<T>() == 0 || data.len() < 2 {
        return;
    }

    let mut ctx = CmpCtx {
        compare,
        panic_payload: None,
    };

    // SAFETY: qsort only moves whole elements within `data` via memcpy, which is a valid way to
    // move any Rust value.
    unsafe {
        c_std_qsort_by(
            data.as_mut_ptr() as *mut c_void,
            data.len(),
            mem::size_of::<T>(),
            rust_fn_cmp::<T, F>,
            &mut ctx as *mut CmpCtx<F> as *mut c_void,
        );
    }

    if let Some(payload) = ctx.panic_payload {
        panic::resume_unwind(payload);
    }
}
