//! Typed front-end of the BSD style quicksort.

use std::cmp::Ordering;
use std::mem;

use crate::quicksort::{self, Elements};

sort_impl!("rust_bsd_qsort_unstable");

/// Sorts the slice, but might not preserve the order of equal elements.
///
/// This sort is unstable (i.e., may reorder equal elements), in-place (i.e., does not allocate),
/// and *O*(*n* \* log(*n*)) in the expected case, *O*(*n*^2) worst-case.
///
/// # Current implementation
///
/// Quicksort with the split-end three-way partition of Bentley and McIlroy. The pivot is the
/// median of three, or the pseudo-median of nine for longer ranges, and ranges of less than seven
/// elements are finished with insertion sort. Elements equal to the pivot are gathered in the
/// middle during partitioning and excluded from further work, so inputs with many duplicates
/// sort quickly.
///
/// # Examples
///
/// ```
/// let mut v = [-5, 4, 1, -3, 2];
///
/// swish_sort::sort(&mut v);
/// assert!(v == [-5, -3, 1, 2, 4]);
/// ```
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    unstable_sort(v, |a, b| a.cmp(b));
}

/// Sorts the slice with a comparator function, but might not preserve the order of equal
/// elements.
///
/// The comparator function must define a total ordering for the elements in the slice. If the
/// ordering is not total, the order of the elements is unspecified, but the slice still holds
/// exactly the original elements. The same holds if `compare` panics.
///
/// # Examples
///
/// ```
/// let mut v = [5, 4, 1, 3, 2];
/// swish_sort::sort_by(&mut v, |a, b| a.cmp(b));
/// assert!(v == [1, 2, 3, 4, 5]);
///
/// // reverse sorting
/// swish_sort::sort_by(&mut v, |a, b| b.cmp(a));
/// assert!(v == [5, 4, 3, 2, 1]);
/// ```
#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    unstable_sort(v, compare);
}

/// Sorts the slice with a key extraction function, but might not preserve the order of equal
/// elements.
///
/// The key function is called twice per comparison.
///
/// # Examples
///
/// ```
/// let mut v = [-5i32, 4, 1, -3, 2];
///
/// swish_sort::sort_by_key(&mut v, |k| k.abs());
/// assert!(v == [1, 2, -3, 4, -5]);
/// ```
#[inline]
pub fn sort_by_key<T, K, F>(v: &mut [T], mut f: F)
where
    F: FnMut(&T) -> K,
    K: Ord,
{
    unstable_sort(v, |a, b| f(a).cmp(&f(b)));
}

// --- IMPL ---

struct TypedElements<'a, T, F> {
    v: &'a mut [T],
    compare: F,
}

impl<T, F> Elements for TypedElements<'_, T, F>
where
    F: FnMut(&T, &T) -> Ordering,
{
    #[inline]
    fn len(&self) -> usize {
        self.v.len()
    }

    #[inline]
    fn compare(&mut self, a: usize, b: usize) -> Ordering {
        (self.compare)(&self.v[a], &self.v[b])
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.v.swap(a, b);
    }

    #[inline]
    fn swap_range(&mut self, a: usize, b: usize, n: usize) {
        if n == 0 {
            return;
        }

        // The ranges never overlap, so one of them lies entirely in front of the other.
        let (front, back) = if a < b { (a, b) } else { (b, a) };
        let (left, right) = self.v.split_at_mut(back);
        left[front..front + n].swap_with_slice(&mut right[..n]);
    }
}

#[inline]
fn unstable_sort<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    // Sorting has no meaningful behavior on zero-sized types.
    if mem::size_of::<T>() == 0 {
        return;
    }

    if v.len() < 2 {
        return;
    }

    quicksort::quicksort(&mut TypedElements { v, compare });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swap_range_both_directions() {
        let mut v = [0, 1, 2, 3, 4, 5, 6, 7];
        let mut elems = TypedElements {
            v: &mut v[..],
            compare: |a: &i32, b: &i32| a.cmp(b),
        };
        elems.swap_range(0, 5, 3);
        elems.swap_range(6, 3, 2);
        assert_eq!(v, [5, 6, 7, 1, 2, 0, 3, 4]);
    }

    #[test]
    fn zero_sized_type_noop() {
        let mut v = [(), (), ()];
        let mut calls = 0;
        sort_by(&mut v, |_, _| {
            calls += 1;
            Ordering::Less
        });
        assert_eq!(calls, 0);
    }
}
