//! Quicksort as described in "Engineering a Sort Function" by Jon L. Bentley and M. Douglas
//! McIlroy (1993), the algorithm behind the BSD `qsort`.
//!
//! The algorithm only ever compares and swaps whole elements by position, which lets the typed
//! and the type-erased front-ends share it through the [`Elements`] trait.

use std::cmp::{self, Ordering};

/// Ranges shorter than this are sorted with insertion sort.
pub(crate) const INSERTION_SORT_THRESHOLD: usize = 7;

/// Ranges longer than this pick their pivot as pseudo-median of nine.
pub(crate) const NINTHER_THRESHOLD: usize = 40;

/// Index addressed view of the sequence being sorted.
///
/// All indices passed in by [`quicksort`] are in-bounds. `swap_range` is only called with
/// non-overlapping ranges.
pub(crate) trait Elements {
    fn len(&self) -> usize;

    /// Three-way comparison of the elements at `a` and `b`.
    fn compare(&mut self, a: usize, b: usize) -> Ordering;

    fn swap(&mut self, a: usize, b: usize);

    /// Swaps the `n` elements starting at `a` with the `n` elements starting at `b`.
    #[inline]
    fn swap_range(&mut self, a: usize, b: usize, n: usize) {
        for i in 0..n {
            self.swap(a + i, b + i);
        }
    }
}

/// Sorts all elements of `v`.
///
/// If the comparison does not implement a total order the resulting order is unspecified, but
/// every element is still present exactly once, since elements only move by swapping.
pub(crate) fn quicksort<E: Elements>(v: &mut E) {
    let len = v.len();
    if len >= 2 {
        quicksort_range(v, 0, len);
    }
}

/// Sorts the range `[lo, lo + len)`.
///
/// Recurses into the smaller partition and loops on the larger one, so the recursion depth is
/// bounded by `log2(len)`.
fn quicksort_range<E: Elements>(v: &mut E, mut lo: usize, mut len: usize) {
    loop {
        if len < INSERTION_SORT_THRESHOLD {
            insertion_sort(v, lo, len);
            return;
        }

        let pivot_pos = choose_pivot(v, lo, len);
        let (lt_len, gt_len) = partition(v, lo, len, pivot_pos);

        // After partitioning the range looks like [ < | == | > ], the equal block is in its final
        // position already.
        let lt_start = lo;
        let gt_start = lo + len - gt_len;

        if lt_len <= gt_len {
            if lt_len > 1 {
                quicksort_range(v, lt_start, lt_len);
            }
            lo = gt_start;
            len = gt_len;
        } else {
            if gt_len > 1 {
                quicksort_range(v, gt_start, gt_len);
            }
            lo = lt_start;
            len = lt_len;
        }

        if len < 2 {
            return;
        }
    }
}

/// Sorts `[lo, lo + len)` by shifting each element left with adjacent swaps.
pub(crate) fn insertion_sort<E: Elements>(v: &mut E, lo: usize, len: usize) {
    let end = lo + len;
    for i in (lo + 1)..end {
        let mut j = i;
        while j > lo && v.compare(j - 1, j) == Ordering::Greater {
            v.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Returns the position of the median of the elements at `a`, `b` and `c`.
fn median3<E: Elements>(v: &mut E, a: usize, b: usize, c: usize) -> usize {
    if v.compare(a, b) == Ordering::Less {
        if v.compare(b, c) == Ordering::Less {
            b
        } else if v.compare(a, c) == Ordering::Less {
            c
        } else {
            a
        }
    } else if v.compare(b, c) == Ordering::Greater {
        b
    } else if v.compare(a, c) == Ordering::Less {
        a
    } else {
        c
    }
}

/// Picks a pivot position inside `[lo, lo + len)`. Expects `len >= INSERTION_SORT_THRESHOLD`.
fn choose_pivot<E: Elements>(v: &mut E, lo: usize, len: usize) -> usize {
    let mut mid = lo + len / 2;

    if len > INSERTION_SORT_THRESHOLD {
        let mut first = lo;
        let mut last = lo + len - 1;

        if len > NINTHER_THRESHOLD {
            let d = len / 8;
            first = median3(v, first, first + d, first + 2 * d);
            mid = median3(v, mid - d, mid, mid + d);
            last = median3(v, last - 2 * d, last - d, last);
        }

        mid = median3(v, first, mid, last);
    }

    mid
}

/// Split-end three-way partition of `[lo, lo + len)` around the element at `pivot_pos`.
///
/// Returns `(lt_len, gt_len)`: the range is afterwards laid out as `lt_len` elements less than
/// the pivot, then all elements equal to it, then `gt_len` elements greater than it.
fn partition<E: Elements>(v: &mut E, lo: usize, len: usize, pivot_pos: usize) -> (usize, usize) {
    // The pivot stays at `lo` for the duration of the scan.
    v.swap(lo, pivot_pos);

    let end = lo + len;

    // Layout during the scan:
    //
    // [ == | < | ? | > | == ]
    //  lo   a    b   c    d  end
    //
    // with `a` and `d` marking the ends of the equal blocks and `b..=c` the unscanned part.
    let mut a = lo + 1;
    let mut b = lo + 1;
    let mut c = end - 1;
    let mut d = end - 1;

    loop {
        while b <= c {
            match v.compare(b, lo) {
                Ordering::Greater => break,
                Ordering::Equal => {
                    v.swap(a, b);
                    a += 1;
                }
                Ordering::Less => {}
            }
            b += 1;
        }

        while b <= c {
            match v.compare(c, lo) {
                Ordering::Less => break,
                Ordering::Equal => {
                    v.swap(c, d);
                    d -= 1;
                }
                Ordering::Greater => {}
            }
            c -= 1;
        }

        if b > c {
            break;
        }

        v.swap(b, c);
        b += 1;
        c -= 1;
    }

    // Here `b == c + 1`. Move the equal blocks from both ends into the middle.
    let lt_len = b - a;
    let gt_len = d - c;

    let n = cmp::min(a - lo, lt_len);
    v.swap_range(lo, b - n, n);

    let n = cmp::min(gt_len, end - d - 1);
    v.swap_range(b, end - n, n);

    (lt_len, gt_len)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counted<'a> {
        v: &'a mut [i32],
        comps: usize,
    }

    impl<'a> Counted<'a> {
        fn new(v: &'a mut [i32]) -> Self {
            Self { v, comps: 0 }
        }
    }

    impl Elements for Counted<'_> {
        fn len(&self) -> usize {
            self.v.len()
        }

        fn compare(&mut self, a: usize, b: usize) -> Ordering {
            self.comps += 1;
            self.v[a].cmp(&self.v[b])
        }

        fn swap(&mut self, a: usize, b: usize) {
            self.v.swap(a, b);
        }
    }

    fn is_sorted(v: &[i32]) -> bool {
        v.windows(2).all(|w| w[0] <= w[1])
    }

    #[test]
    fn insertion_sort_sub_range() {
        let mut v = [9, 5, 4, 3, 2, 1, 0];
        let mut elems = Counted::new(&mut v);
        insertion_sort(&mut elems, 1, 5);
        assert_eq!(v, [9, 1, 2, 3, 4, 5, 0]);
    }

    #[test]
    fn median3_all_orders() {
        for perm in [
            [1, 2, 3],
            [1, 3, 2],
            [2, 1, 3],
            [2, 3, 1],
            [3, 1, 2],
            [3, 2, 1],
        ] {
            let mut v = perm;
            let mut elems = Counted::new(&mut v);
            let pos = median3(&mut elems, 0, 1, 2);
            assert_eq!(perm[pos], 2, "{perm:?}");
        }
    }

    #[test]
    fn partition_three_way() {
        let mut v = [5, 1, 5, 9, 3, 5, 7, 5, 0, 8, 5];
        let len = v.len();
        let mut elems = Counted::new(&mut v);
        let (lt_len, gt_len) = partition(&mut elems, 0, len, 0);

        assert_eq!(lt_len, 3);
        assert_eq!(gt_len, 3);
        assert!(v[..lt_len].iter().all(|&x| x < 5));
        assert!(v[lt_len..len - gt_len].iter().all(|&x| x == 5));
        assert!(v[len - gt_len..].iter().all(|&x| x > 5));
    }

    #[test]
    fn partition_no_equal_besides_pivot() {
        let mut v = [4, 8, 1, 6, 2, 7, 3, 9];
        let len = v.len();
        let mut elems = Counted::new(&mut v);
        let (lt_len, gt_len) = partition(&mut elems, 0, len, 0);

        assert_eq!((lt_len, gt_len), (3, 4));
        assert_eq!(v[3], 4);
    }

    #[test]
    fn sorts_all_sizes_around_thresholds() {
        for len in 0..=(NINTHER_THRESHOLD * 3) {
            let mut v = (0..len as i32)
                .map(|x| (x * 7919) % 31 - 15)
                .collect::<Vec<_>>();
            let mut expected = v.clone();
            expected.sort();

            quicksort(&mut Counted::new(&mut v));
            assert_eq!(v, expected, "len: {len}");
        }
    }

    #[test]
    fn all_equal_is_linear() {
        let len = 10_000;
        let mut v = vec![66; len];
        let mut elems = Counted::new(&mut v);
        quicksort(&mut elems);

        // Pivot selection plus a single partition scan.
        assert!(elems.comps < 2 * len, "comps: {}", elems.comps);
    }

    #[test]
    fn already_sorted_unchanged() {
        let mut v = (0..1_000).collect::<Vec<i32>>();
        let expected = v.clone();
        quicksort(&mut Counted::new(&mut v));
        assert_eq!(v, expected);
    }

    #[test]
    fn descending_and_pipe_organ() {
        let len = 100_000;
        let mut v = (0..len).rev().collect::<Vec<i32>>();
        quicksort(&mut Counted::new(&mut v));
        assert!(is_sorted(&v));

        let mut v = (0..len)
            .map(|x| if x < len / 2 { x } else { len - x })
            .collect::<Vec<i32>>();
        quicksort(&mut Counted::new(&mut v));
        assert!(is_sorted(&v));
    }
}
