//! A toy learned index over a fixed-size array of integer keys.
//!
//! The keys are sorted, a greedy piecewise-linear model is fitted to their
//! ranks, and every query is answered by predicting a rank and binary
//! searching a small window around it. [`Report`] runs the whole pipeline
//! over an [`Input`] and renders the per-stage text report.

mod error;
mod index;
mod input;
mod query;
mod report;

pub use error::{ParseError, Result};
pub use index::LearnedIndex;
pub use input::Input;
pub use query::{QueryOutcome, QueryTrace};
pub use report::{QueryReport, Report};

pub use learned_index_segmentation::{GlobalFit, Key, LinearModel, Segment, Segmentation};
pub use sorted_array::SortedArray;

/// Number of dataset keys the program reads
pub const DATASET_SIZE: usize = 100;

/// Number of sorted keys echoed in the first stage of the report
pub const PREVIEW_SIZE: usize = 10;
