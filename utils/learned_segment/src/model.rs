//! This file defines the model portion of the index, an integer linear
//! approximator mapping a key to its rank.
//!
//! NOTE: A model is fitted through two *consecutive* points only, which lets it
//! be stored as an integer pair `(a, b)` with `f(key) = ceil((key + a) / b)`.

use num::Integer;
use serde::{Deserialize, Serialize};

use crate::Key;

/// A simple linear model for a key-rank segment of data.
///
/// A model with `b == 0` is *constant*: it predicts `a` for every key. This is
/// what fitting two equal keys produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinearModel {
    pub(crate) a: i128,
    pub(crate) b: i128,
}

impl LinearModel {
    pub fn new(a: i128, b: i128) -> Self {
        debug_assert!(b >= 0);
        Self { a, b }
    }

    /// A model that predicts `index` regardless of the key
    pub fn constant(index: usize) -> Self {
        Self {
            a: index as i128,
            b: 0,
        }
    }

    /// Fit the line through the points `(data[y0], y0)` and `(data[y1], y1)`.
    ///
    /// Expects `y1 == y0 + 1` and `data` sorted; the inverted two-point form is
    /// only exact at both points for consecutive ranks.
    pub fn fit<K: Key>(data: &[K], y0: usize, y1: usize) -> Self {
        debug_assert!(y0 < y1);

        let x0: i128 = data[y0].into();
        let x1: i128 = data[y1].into();

        if x0 == x1 {
            return Self::constant(y0);
        }

        Self::new(y0 as i128 * x1 - y1 as i128 * x0, x1 - x0)
    }

    pub fn a(&self) -> i128 {
        self.a
    }

    pub fn b(&self) -> i128 {
        self.b
    }

    pub fn is_constant(&self) -> bool {
        self.b == 0
    }

    /// Approximate rank of `key`. May fall outside the dataset's index range
    /// for keys the model was not fitted around.
    pub fn predict<K: Key>(&self, key: K) -> i128 {
        if self.is_constant() {
            self.a
        } else {
            let key: i128 = key.into();
            // Fully qualified: the inherent `i128::div_ceil` is unstable
            Integer::div_ceil(&(key + self.a), &self.b)
        }
    }

    /// Absolute distance between the predicted and the true rank of `data[index]`.
    pub fn error<K: Key>(&self, data: &[K], index: usize) -> u128 {
        (self.predict(data[index]) - index as i128).unsigned_abs()
    }
}

/// Result of approximating a whole dataset with the single model through its
/// first two points.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalFit<K> {
    pub model: LinearModel,
    /// Largest prediction error over the dataset
    pub max_error: u128,
    /// First key attaining `max_error`, and its position
    pub key: K,
    pub position: usize,
}

/// Fits one model through the first two points of `data` and measures how badly
/// it approximates the rest. Returns `None` for fewer than two keys.
pub fn fit_global<K: Key>(data: &[K]) -> Option<GlobalFit<K>> {
    if data.len() < 2 {
        return None;
    }

    let model = LinearModel::fit(data, 0, 1);

    let mut max_error = 0;
    let mut position = 0;
    for index in 0..data.len() {
        let error = model.error(data, index);
        if error > max_error {
            max_error = error;
            position = index;
        }
    }

    Some(GlobalFit {
        model,
        max_error,
        key: data[position],
        position,
    })
}
