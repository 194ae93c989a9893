//! In-place, comparator driven, unstable sorting in the style of BSD `qsort`.
//!
//! The same quicksort core is reachable through three surfaces:
//!
//! - [`sort`], [`sort_by`] and [`sort_by_key`] for typed slices.
//! - [`bytes::sort_bytes`] for opaque fixed-size records stored back to back in a byte buffer.
//! - [`ffi::swish_qsort`], a C ABI entry point with the classic `qsort` signature.

use std::cmp::Ordering;

/// Common interface of the sort implementations in [`unstable`], used by the test and benchmark
/// harness to run the same suite against each of them.
pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering;
}

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl $crate::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord,
            {
                sort(arr);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> Ordering,
            {
                sort_by(arr, compare);
            }
        }
    };
}

mod quicksort;

pub mod bytes;
pub mod ffi;
pub mod patterns;
pub mod unstable;

pub use unstable::rust_bsd_qsort::{sort, sort_by, sort_by_key};
