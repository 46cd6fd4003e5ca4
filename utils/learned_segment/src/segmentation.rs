use std::borrow::Borrow;
use std::ops::Range;

use serde::{Deserialize, Serialize};
use slice_search::{upper_bound_always, BinarySearch, Search};

use crate::{model::LinearModel, Key};

/// A linear model together with the contiguous run of ranks it is responsible for.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment<K> {
    pub model: LinearModel,

    /// Largest key this segment covers, i.e. the key at its last rank
    pub boundary: K,

    /// First covered rank, and how many ranks are covered. Not needed for
    /// lookups but useful for debugging.
    pub start: usize,
    pub len: usize,
}

impl<K> Segment<K> {
    /// Ranks covered by this segment
    pub fn ranks(&self) -> Range<usize> {
        self.start..self.start + self.len
    }
}

impl<K> Borrow<K> for Segment<K> {
    fn borrow(&self) -> &K {
        &self.boundary
    }
}

/// A data structure that walks the keys once, extending the current model
/// until some key falls outside the error bound, then closes it and fits the
/// next one. Greedy: segments are never revisited.
struct GreedySegmentation<'d, K> {
    data: &'d [K],
    target_max_error: u128,

    model: LinearModel,
    start: usize,

    segments: Vec<Segment<K>>,
}

impl<'d, K: Key> GreedySegmentation<'d, K> {
    fn new(data: &'d [K], target_max_error: usize) -> Self {
        debug_assert!(data.len() >= 2);

        Self {
            data,
            target_max_error: target_max_error as u128,
            model: LinearModel::fit(data, 0, 1),
            start: 0,
            segments: Vec::with_capacity(data.len()),
        }
    }

    /// Close the current segment at rank `last` (inclusive); the next segment
    /// starts right after it.
    fn emit(&mut self, last: usize) {
        let segment = Segment {
            model: self.model,
            boundary: self.data[last],
            start: self.start,
            len: last + 1 - self.start,
        };

        tracing::debug!(
            function = self.segments.len(),
            a = %segment.model.a,
            b = %segment.model.b,
            boundary = %segment.boundary,
            ranks = ?segment.ranks(),
            "emitted segment"
        );

        self.segments.push(segment);
        self.start = last + 1;
    }

    fn run(mut self) -> Vec<Segment<K>> {
        let size = self.data.len();

        // Ranks 0 and 1 are never checked. Every later refit at (ix, ix + 1)
        // is checked at ix + 1 on the next iteration.
        for ix in 2..size {
            let error = self.model.error(self.data, ix);

            if error > self.target_max_error {
                self.emit(ix - 1);

                if ix == size - 1 {
                    // Lone final key gets its own single-rank segment
                    self.model = LinearModel::constant(size - 1);
                    self.emit(size - 1);
                } else if ix == size - 2 {
                    // No pair left to fit: pin the last two ranks to the final one
                    self.model = LinearModel::constant(size - 1);
                } else {
                    self.model = LinearModel::fit(self.data, ix, ix + 1);
                }
            } else if ix == size - 1 {
                self.emit(ix);
            }
        }

        if size == 2 {
            self.emit(1);
        }

        debug_assert_eq!(self.start, size);
        self.segments
    }
}

/// Partition sorted `data` into segments such that every rank is predicted
/// within `target_max_error` by the model of its segment.
///
/// Two ranks may exceed the bound. Rank 1 is off by one when the first two
/// keys are equal, since the first model is never checked against it. When
/// the bound is broken at the second-to-last rank, the final two ranks share
/// a constant model pinned to the last one, leaving rank `N - 2` off by one.
pub fn greedy_segmentation<K: Key>(data: &[K], target_max_error: usize) -> Vec<Segment<K>> {
    debug_assert!(data.windows(2).all(|pair| pair[0] <= pair[1]));

    match data.len() {
        0 => Vec::new(),
        1 => vec![Segment {
            model: LinearModel::constant(0),
            boundary: data[0],
            start: 0,
            len: 1,
        }],
        _ => GreedySegmentation::new(data, target_max_error).run(),
    }
}

/// An ordered collection of segments, sorted by boundary. Never holds more
/// segments than the dataset it was built from has keys.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segmentation<K> {
    segments: Vec<Segment<K>>,
}

impl<K: Key> Segmentation<K> {
    pub fn build(data: &[K], target_max_error: usize) -> Self {
        Self {
            segments: greedy_segmentation(data, target_max_error),
        }
    }

    /// Find the segment responsible for `key`: the first one whose boundary is
    /// greater than or equal to it, or the last segment if there is none.
    /// Each probed segment index is reported to `probe`.
    ///
    /// Returns `None` only if there are no segments at all.
    pub fn locate<P: FnMut(usize)>(&self, key: &K, probe: P) -> Option<usize> {
        if self.segments.is_empty() {
            return None;
        }

        let search = BinarySearch::search_range(&self.segments, 0..self.segments.len(), key, probe);
        Some(upper_bound_always(search, self.segments.len()))
    }

    /// The segment whose rank range contains `rank`
    pub fn covering(&self, rank: usize) -> Option<&Segment<K>> {
        let index = self.segments.partition_point(|segment| segment.ranks().end <= rank);
        self.segments
            .get(index)
            .filter(|segment| segment.ranks().contains(&rank))
    }
}

impl<K> Segmentation<K> {
    pub fn segments(&self) -> &[Segment<K>] {
        &self.segments
    }

    pub fn get(&self, index: usize) -> Option<&Segment<K>> {
        self.segments.get(index)
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
