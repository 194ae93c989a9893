//! Sorting of opaque fixed-size records stored back to back in a byte buffer.
//!
//! This is the type-erased shape of the classic `qsort`: a buffer, an element size and a
//! comparator that sees each element as a byte slice. Prefer the typed [`crate::sort_by`] when
//! the element type is known.

use std::cmp::Ordering;
use std::mem;
use std::ptr;

use crate::quicksort::{self, Elements};

const WORD_SIZE: usize = mem::size_of::<usize>();

/// Sorts the `buf.len() / elem_size` records in `buf`, but might not preserve the order of equal
/// records.
///
/// `compare` is handed two `elem_size` byte long slices. Records are only ever moved as a whole,
/// so no bytes of one record bleed into another, regardless of `elem_size`.
///
/// # Panics
///
/// Panics if `elem_size` is zero or `buf.len()` is not a multiple of `elem_size`.
///
/// # Examples
///
/// ```
/// // Three byte records, keyed on their first byte.
/// let mut buf = [3, b'c', b'c', 1, b'a', b'a', 2, b'b', b'b'];
///
/// swish_sort::bytes::sort_bytes(&mut buf, 3, |a, b| a[0].cmp(&b[0]));
/// assert_eq!(buf, [1, b'a', b'a', 2, b'b', b'b', 3, b'c', b'c']);
/// ```
pub fn sort_bytes<F>(buf: &mut [u8], elem_size: usize, compare: F)
where
    F: FnMut(&[u8], &[u8]) -> Ordering,
{
    assert!(elem_size > 0, "sort_bytes: elem_size must be greater than zero");
    assert!(
        buf.len() % elem_size == 0,
        "sort_bytes: buffer length {} is not a multiple of elem_size {}",
        buf.len(),
        elem_size
    );

    if buf.len() / elem_size < 2 {
        return;
    }

    let swap_kind = SwapKind::new(buf.as_ptr(), elem_size);

    quicksort::quicksort(&mut ByteElements {
        buf,
        elem_size,
        swap_kind,
        compare,
    });
}

/// How elements are exchanged, decided once per sort.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum SwapKind {
    /// Every element is word aligned and a whole number of words long.
    Words,
    Bytes,
}

impl SwapKind {
    pub(crate) fn new(base: *const u8, elem_size: usize) -> Self {
        if (base as usize) % mem::align_of::<usize>() == 0 && elem_size % WORD_SIZE == 0 {
            SwapKind::Words
        } else {
            SwapKind::Bytes
        }
    }
}

struct ByteElements<'a, F> {
    buf: &'a mut [u8],
    elem_size: usize,
    swap_kind: SwapKind,
    compare: F,
}

impl<F> ByteElements<'_, F> {
    /// Swaps the `n` elements starting at element `a` with those starting at element `b`.
    #[inline]
    fn swap_elements(&mut self, a: usize, b: usize, n: usize) {
        let es = self.elem_size;
        let (front, back) = if a < b { (a, b) } else { (b, a) };

        // Keeps the raw pointer copy below in-bounds and non-overlapping, even if called with
        // bogus positions.
        assert!(front + n <= back && (back + n) * es <= self.buf.len());

        let base = self.buf.as_mut_ptr();

        // SAFETY: The assert above guarantees that both ranges of `n * es` bytes are in-bounds of
        // `buf` and don't overlap. For `SwapKind::Words` the base pointer is word aligned and `es`
        // is a multiple of the word size, so every element start is word aligned too.
        unsafe {
            let x = base.add(front * es);
            let y = base.add(back * es);

            match self.swap_kind {
                SwapKind::Words => ptr::swap_nonoverlapping(
                    x as *mut usize,
                    y as *mut usize,
                    (n * es) / WORD_SIZE,
                ),
                SwapKind::Bytes => ptr::swap_nonoverlapping(x, y, n * es),
            }
        }
    }
}

impl<F> Elements for ByteElements<'_, F>
where
    F: FnMut(&[u8], &[u8]) -> Ordering,
{
    #[inline]
    fn len(&self) -> usize {
        self.buf.len() / self.elem_size
    }

    #[inline]
    fn compare(&mut self, a: usize, b: usize) -> Ordering {
        let es = self.elem_size;
        let x = &self.buf[a * es..(a + 1) * es];
        let y = &self.buf[b * es..(b + 1) * es];
        (self.compare)(x, y)
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        if a != b {
            self.swap_elements(a, b, 1);
        }
    }

    #[inline]
    fn swap_range(&mut self, a: usize, b: usize, n: usize) {
        if n != 0 {
            self.swap_elements(a, b, n);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swap_kind_selection() {
        let words = [0usize; 4];
        let base = words.as_ptr() as *const u8;

        assert_eq!(SwapKind::new(base, WORD_SIZE), SwapKind::Words);
        assert_eq!(SwapKind::new(base, 3 * WORD_SIZE), SwapKind::Words);
        assert_eq!(SwapKind::new(base, 3), SwapKind::Bytes);
        assert_eq!(SwapKind::new(base, WORD_SIZE + 1), SwapKind::Bytes);
        // Misaligned base.
        assert_eq!(
            SwapKind::new(base.wrapping_add(1), WORD_SIZE),
            SwapKind::Bytes
        );
    }

    #[test]
    fn swap_range_moves_whole_records() {
        let mut buf = *b"aaabbbcccdddeee";
        let mut elems = ByteElements {
            buf: &mut buf[..],
            elem_size: 3,
            swap_kind: SwapKind::Bytes,
            compare: |a: &[u8], b: &[u8]| a.cmp(b),
        };
        elems.swap_range(3, 0, 2);
        elems.swap(2, 4);
        assert_eq!(&buf, b"dddeeebbbaaaccc");
    }

    #[test]
    fn word_swap_path() {
        // Two words per record, keyed on the first one.
        let mut records = [[3usize, 30], [1, 10], [2, 20], [0, 0]];
        let es = mem::size_of::<[usize; 2]>();

        // SAFETY: `records` is plain data without padding, viewing it as bytes is fine.
        let buf = unsafe {
            std::slice::from_raw_parts_mut(records.as_mut_ptr() as *mut u8, es * records.len())
        };
        assert_eq!(SwapKind::new(buf.as_ptr(), es), SwapKind::Words);

        sort_bytes(buf, es, |a, b| key(a).cmp(&key(b)));
        assert_eq!(records, [[0, 0], [1, 10], [2, 20], [3, 30]]);
    }

    fn key(record: &[u8]) -> usize {
        let mut word = [0u8; WORD_SIZE];
        word.copy_from_slice(&record[..WORD_SIZE]);
        usize::from_ne_bytes(word)
    }

    #[test]
    #[should_panic]
    fn zero_elem_size_panics() {
        sort_bytes(&mut [1, 2, 3], 0, |a, b| a.cmp(b));
    }

    #[test]
    #[should_panic]
    fn ragged_buffer_panics() {
        sort_bytes(&mut [1, 2, 3, 4, 5], 2, |a, b| a.cmp(b));
    }
}
