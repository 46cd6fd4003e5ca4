#![no_std]

//! A constant-size, zero-allocation sorted array. Keys are sorted once on
//! construction and never change afterwards.

mod sort;

#[cfg(feature = "serde")]
mod serde;

use core::ops::Range;

pub use sort::quick_sort;
use slice_search::*;

/// `SortedArray` is a constant-size array of `N` keys in non-decreasing order.
/// Duplicate keys are allowed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SortedArray<K, const N: usize> {
    inner: [K; N],
}

impl<K: Ord + Copy, const N: usize> SortedArray<K, N> {
    /// Sorts the given keys and takes ownership of them.
    pub fn from_unsorted(mut inner: [K; N]) -> Self {
        quick_sort(&mut inner);
        Self { inner }
    }

    /// Returns `true` if `key` lies between the smallest and the largest key,
    /// inclusive. Always `false` for an empty array.
    pub fn contains_in_range(&self, key: &K) -> bool {
        match (self.first(), self.last()) {
            (Some(first), Some(last)) => first <= key && key <= last,
            _ => false,
        }
    }

    /// Binary search restricted to the index range `range`, reporting each
    /// probed index to `probe`. See [`Search::search_range`].
    pub fn search_range<P>(&self, range: Range<usize>, key: &K, probe: P) -> Result<usize, usize>
    where
        P: FnMut(usize),
    {
        BinarySearch::search_range(&self.inner, range, key, probe)
    }
}

impl<K, const N: usize> SortedArray<K, N> {
    /// Borrow the sorted keys as a slice
    pub fn as_slice(&self) -> &[K] {
        &self.inner
    }

    pub fn get(&self, index: usize) -> Option<&K> {
        self.inner.get(index)
    }

    /// Returns the smallest key, if any exists
    pub fn first(&self) -> Option<&K> {
        self.inner.first()
    }

    /// Returns the largest key, if any exists
    pub fn last(&self) -> Option<&K> {
        self.inner.last()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &K> + ExactSizeIterator {
        self.inner.iter()
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }
}
