use std::str::FromStr;

use crate::{Key, ParseError, Result};

/// Program input, in stream order: `N` dataset keys (any order), the target
/// maximum prediction error, then any number of query keys.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Input<K, const N: usize> {
    pub dataset: [K; N],
    pub target_max_error: usize,
    pub queries: Vec<K>,
}

fn parse_token<T: FromStr>(index: usize, token: &str) -> Result<T> {
    token.parse().map_err(|_| ParseError::InvalidToken {
        position: index + 1,
        token: token.to_owned(),
    })
}

impl<K: Key + FromStr, const N: usize> FromStr for Input<K, N> {
    type Err = ParseError;

    fn from_str(text: &str) -> Result<Self> {
        let mut tokens = text.split_whitespace().enumerate();

        let mut dataset = Vec::with_capacity(N);
        for (index, token) in tokens.by_ref().take(N) {
            dataset.push(parse_token(index, token)?);
        }
        let dataset: [K; N] =
            dataset
                .try_into()
                .map_err(|short: Vec<K>| ParseError::TruncatedDataset {
                    expected: N,
                    found: short.len(),
                })?;

        let (index, token) = tokens.next().ok_or(ParseError::MissingErrorBound)?;
        let bound: i128 = parse_token(index, token)?;
        if bound < 0 {
            return Err(ParseError::NegativeErrorBound(bound));
        }
        let target_max_error =
            usize::try_from(bound).map_err(|_| ParseError::ErrorBoundTooLarge(bound))?;

        let queries = tokens
            .map(|(index, token)| parse_token(index, token))
            .collect::<Result<Vec<K>>>()?;

        Ok(Self {
            dataset,
            target_max_error,
            queries,
        })
    }
}
