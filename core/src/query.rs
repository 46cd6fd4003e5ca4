use std::ops::Range;

use serde::{Deserialize, Serialize};

/// What a query compared along the way: the segment boundaries probed while
/// locating the segment, and the keys probed inside the prediction window.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryTrace<K> {
    pub segment: usize,
    pub boundaries: Vec<K>,
    pub prediction: i128,
    /// Half-open rank window searched for the key; may be empty
    pub window: Range<usize>,
    pub compared: Vec<K>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum QueryOutcome<K> {
    /// The key is below the smallest or above the largest key; nothing was searched
    OutOfRange,
    NotFound { trace: QueryTrace<K> },
    Found { trace: QueryTrace<K>, position: usize },
}

impl<K> QueryOutcome<K> {
    pub fn position(&self) -> Option<usize> {
        match self {
            Self::Found { position, .. } => Some(*position),
            _ => None,
        }
    }

    pub fn trace(&self) -> Option<&QueryTrace<K>> {
        match self {
            Self::OutOfRange => None,
            Self::NotFound { trace } | Self::Found { trace, .. } => Some(trace),
        }
    }
}
