use learned_index_segmentation::{fit_global, GlobalFit, Segmentation};
use sorted_array::SortedArray;

use crate::{Key, QueryOutcome, QueryTrace};

/// A learned index over `N` sorted keys: a greedy piecewise-linear model
/// predicts the rank of a key, and a binary search inside a window of
/// `target_max_error` ranks around the prediction confirms it.
#[derive(Clone, Debug)]
pub struct LearnedIndex<K, const N: usize> {
    data: SortedArray<K, N>,
    segmentation: Segmentation<K>,
    target_max_error: usize,
}

impl<K: Key, const N: usize> LearnedIndex<K, N> {
    pub fn build(data: SortedArray<K, N>, target_max_error: usize) -> Self {
        let segmentation = Segmentation::build(data.as_slice(), target_max_error);

        tracing::debug!(
            keys = N,
            target_max_error,
            segments = segmentation.len(),
            "built learned index"
        );

        Self {
            data,
            segmentation,
            target_max_error,
        }
    }

    /// The single model through the first two keys, with its worst error.
    pub fn global_fit(&self) -> Option<GlobalFit<K>> {
        fit_global(self.data.as_slice())
    }

    /// Resolve `key` to a rank holding it, recording every comparison made.
    ///
    /// With duplicate keys, any rank holding `key` may be returned.
    pub fn query(&self, key: K) -> QueryOutcome<K> {
        if !self.data.contains_in_range(&key) {
            tracing::trace!(%key, "query out of range");
            return QueryOutcome::OutOfRange;
        }

        let segments = self.segmentation.segments();
        let mut boundaries = Vec::new();
        let Some(segment) = self
            .segmentation
            .locate(&key, |ix| boundaries.push(segments[ix].boundary))
        else {
            return QueryOutcome::OutOfRange;
        };

        let prediction = segments[segment].model.predict(key);

        // Inclusive window [prediction - err, prediction + err], clipped to the
        // valid ranks and searched as a half-open range
        let err = self.target_max_error as i128;
        let size = N as i128;
        let lo = (prediction - err).clamp(0, size) as usize;
        let hi = ((prediction + err).min(size - 1) + 1).clamp(0, size) as usize;

        let keys = self.data.as_slice();
        let mut compared = Vec::new();
        let search = self
            .data
            .search_range(lo..hi, &key, |ix| compared.push(keys[ix]));

        let trace = QueryTrace {
            segment,
            boundaries,
            prediction,
            window: lo..hi,
            compared,
        };

        tracing::trace!(
            %key,
            segment,
            %prediction,
            window = ?trace.window,
            found = ?search.ok(),
            "resolved query"
        );

        match search {
            Ok(position) => QueryOutcome::Found { trace, position },
            Err(_) => QueryOutcome::NotFound { trace },
        }
    }

    /// Rank of some key equal to `key`, if present.
    pub fn get(&self, key: K) -> Option<usize> {
        self.query(key).position()
    }
}

impl<K, const N: usize> LearnedIndex<K, N> {
    pub fn data(&self) -> &SortedArray<K, N> {
        &self.data
    }

    pub fn segmentation(&self) -> &Segmentation<K> {
        &self.segmentation
    }

    pub fn target_max_error(&self) -> usize {
        self.target_max_error
    }
}
