use thiserror::Error;

pub type Result<T> = std::result::Result<T, ParseError>;

/// Everything that can go wrong turning the input text into an [`Input`](crate::Input).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Positions are 1-based, counted in whitespace-separated tokens.
    #[error("token {position} ({token:?}) is not a valid integer")]
    InvalidToken { position: usize, token: String },

    #[error("expected {expected} dataset integers, found only {found}")]
    TruncatedDataset { expected: usize, found: usize },

    #[error("input ended before the target maximum prediction error")]
    MissingErrorBound,

    #[error("target maximum prediction error must be non-negative, got {0}")]
    NegativeErrorBound(i128),

    #[error("target maximum prediction error {0} does not fit in a usize")]
    ErrorBoundTooLarge(i128),
}
