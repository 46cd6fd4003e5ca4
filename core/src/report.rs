use std::fmt;

use serde::Serialize;

use crate::{GlobalFit, Input, Key, LearnedIndex, QueryOutcome, Segment, SortedArray, PREVIEW_SIZE};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QueryReport<K> {
    pub key: K,
    #[serde(flatten)]
    pub outcome: QueryOutcome<K>,
}

/// Everything the program computes for one input, stage by stage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Report<K, const N: usize> {
    pub dataset: SortedArray<K, N>,
    pub global_fit: Option<GlobalFit<K>>,
    pub target_max_error: usize,
    pub segments: Vec<Segment<K>>,
    pub queries: Vec<QueryReport<K>>,
}

impl<K: Key, const N: usize> Report<K, N> {
    pub fn generate(input: Input<K, N>) -> Self {
        let index = LearnedIndex::build(
            SortedArray::from_unsorted(input.dataset),
            input.target_max_error,
        );

        let queries = input
            .queries
            .iter()
            .map(|&key| QueryReport {
                key,
                outcome: index.query(key),
            })
            .collect();

        Self {
            dataset: *index.data(),
            global_fit: index.global_fit(),
            target_max_error: index.target_max_error(),
            segments: index.segmentation().segments().to_vec(),
            queries,
        }
    }
}

fn stage_header(f: &mut fmt::Formatter<'_>, stage: usize) -> fmt::Result {
    writeln!(f, "Stage {}", stage)?;
    writeln!(f, "==========")
}

impl<K: Key, const N: usize> fmt::Display for Report<K, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        stage_header(f, 1)?;
        let preview = &self.dataset.as_slice()[..N.min(PREVIEW_SIZE)];
        write!(f, "First {} numbers:", preview.len())?;
        for key in preview {
            write!(f, " {}", key)?;
        }
        writeln!(f)?;
        writeln!(f)?;

        stage_header(f, 2)?;
        if let Some(fit) = &self.global_fit {
            writeln!(f, "Maximum prediction error: {}", fit.max_error)?;
            writeln!(f, "For key: {}", fit.key)?;
            writeln!(f, "At position: {}", fit.position)?;
        }
        writeln!(f)?;

        stage_header(f, 3)?;
        writeln!(f, "Target maximum prediction error: {}", self.target_max_error)?;
        for (ix, segment) in self.segments.iter().enumerate() {
            writeln!(
                f,
                "Function {:2}: a = {:4}, b = {:3}, max element = {:3}",
                ix,
                segment.model.a(),
                segment.model.b(),
                segment.boundary
            )?;
        }
        writeln!(f)?;

        stage_header(f, 4)?;
        for query in &self.queries {
            write!(f, "{}", query)?;
        }
        writeln!(f)
    }
}

impl<K: Key> fmt::Display for QueryReport<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Searching for {}:", self.key)?;

        let trace = match &self.outcome {
            QueryOutcome::OutOfRange => return writeln!(f, "Step 1: not found!"),
            QueryOutcome::NotFound { trace } | QueryOutcome::Found { trace, .. } => trace,
        };
        writeln!(f, "Step 1: search key in data domain.")?;

        write!(f, "Step 2:")?;
        for boundary in &trace.boundaries {
            write!(f, " {}", boundary)?;
        }
        writeln!(f)?;

        write!(f, "Step 3:")?;
        for key in &trace.compared {
            write!(f, " {}", key)?;
        }
        match self.outcome.position() {
            Some(position) => writeln!(f, " @ dataset[{}]!", position),
            None => writeln!(f, " not found!"),
        }
    }
}
