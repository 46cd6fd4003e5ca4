#![no_std]

//! Binary search over a sub-range of a sorted slice, with an observer hook.
//!
//! The search reports every element it compares against through a probe
//! callback instead of printing, so callers can reconstruct a comparison
//! trace without touching the search itself. The same routine serves both
//! lookups a learned index needs: an exact lookup (where `Err` means "absent")
//! and a bound lookup (where `Err` is resolved with [`upper_bound_always`]).
#![deny(missing_docs)]

use core::borrow::Borrow;
use core::cmp::Ordering;
use core::ops::Range;

/// Returns the index of the smallest element greater than or equal to the search
/// key.
///
/// # Example
/// ```
/// use slice_search::*;
///
/// let array = [0, 1, 2, 3, 4, 6];
///
/// let search_result = BinarySearch::search(&array[..], &5);
/// assert_eq!(upper_bound(search_result, 6), Some(5));
///
/// let search_result = BinarySearch::search(&array[..], &10);
/// assert_eq!(upper_bound(search_result, 6), None);
/// ```
pub fn upper_bound(search: Result<usize, usize>, cap: usize) -> Option<usize> {
    match search {
        Ok(index) => Some(index),
        Err(index) if index < cap => Some(index),
        Err(_) => None,
    }
}

/// Returns the index of the smallest element greater than or equal to the search
/// key, or the last index.
pub fn upper_bound_always(search: Result<usize, usize>, cap: usize) -> usize {
    upper_bound(search, cap).unwrap_or(cap.saturating_sub(1))
}

/// An algorithm for searching a sorted slice
pub trait Search {
    /// Search a whole slice of `T` by comparing with a given value of `T`.
    ///
    /// If the value is found then `Result::Ok` is returned, containing the index of
    /// the matching element. If the value is not found then `Result::Err` is returned,
    /// containing the index where a matching element could be inserted while
    /// maintaining sorted order.
    ///
    /// ```
    /// use slice_search::*;
    ///
    /// let slice = [1, 2, 3, 5, 8];
    /// assert_eq!(BinarySearch::search(&slice, &3), Ok(2));
    /// assert_eq!(BinarySearch::search(&slice, &6), Err(4));
    /// ```
    fn search<T: Ord>(slice: &[T], x: &T) -> Result<usize, usize> {
        Self::search_range(slice, 0..slice.len(), x, |_| ())
    }

    /// Search the half-open index range `range` of a slice of `T`, where
    /// `T: Borrow<K>`, reporting the index of every probed element to `probe`
    /// in the order the comparisons happen.
    ///
    /// Indices in the result are absolute (relative to `slice`, not `range`).
    /// An empty or inverted range probes nothing and returns `Err(range.start)`.
    ///
    /// ```
    /// use slice_search::*;
    ///
    /// let slice = [10, 20, 30, 40, 50, 60];
    /// let mut probed = [0; 4];
    /// let mut count = 0;
    ///
    /// let result = BinarySearch::search_range(&slice, 1..5, &40, |ix| {
    ///     probed[count] = slice[ix];
    ///     count += 1;
    /// });
    ///
    /// assert_eq!(result, Ok(3));
    /// assert_eq!(&probed[..count], &[40]);
    /// ```
    fn search_range<K, T, P>(
        slice: &[T],
        range: Range<usize>,
        x: &K,
        probe: P,
    ) -> Result<usize, usize>
    where
        K: Ord,
        T: Borrow<K>,
        P: FnMut(usize);
}

/// Classic halving search with `mid = (lo + hi) / 2`, with computational
/// complexity `O(log n)`.
///
/// Unlike `slice::binary_search`, the probe order is fixed: a match on the
/// first probed midpoint returns immediately, and on duplicates whichever
/// equal element is probed first wins.
pub struct BinarySearch;

impl Search for BinarySearch {
    fn search_range<K, T, P>(
        slice: &[T],
        range: Range<usize>,
        x: &K,
        mut probe: P,
    ) -> Result<usize, usize>
    where
        K: Ord,
        T: Borrow<K>,
        P: FnMut(usize),
    {
        let mut lo = range.start;
        let mut hi = range.end.min(slice.len());

        while lo < hi {
            let mid = (lo + hi) / 2;
            probe(mid);

            match x.cmp(slice[mid].borrow()) {
                Ordering::Less => hi = mid,
                Ordering::Greater => lo = mid + 1,
                Ordering::Equal => return Ok(mid),
            }
        }

        Err(lo)
    }
}
