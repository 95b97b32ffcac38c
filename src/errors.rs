//! Error types
//!
//! Every failure in the summarization pipeline is reported through
//! [`LexRankError`]. Variants are grouped into three coarse [`ErrorKind`]s so
//! callers can decide on a policy (e.g. retry without a threshold on
//! [`ErrorKind::DegenerateGraph`]) without matching every variant.

use thiserror::Error;

/// Boxed error produced by an embedding provider.
pub type ProviderError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, LexRankError>;

/// Coarse classification of a [`LexRankError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Caller-supplied data or configuration violates a precondition.
    InvalidInput,
    /// The (thresholded) similarity graph has no usable mass.
    DegenerateGraph,
    /// The embedding provider failed or could not be resolved.
    UpstreamProviderFailure,
}

#[derive(Debug, Error)]
pub enum LexRankError {
    #[error("requested summary length must be non-negative, got {0}")]
    NegativeCount(i64),

    #[error("embedding row {row} has dimension {found}, expected {expected}")]
    DimensionMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("expected {expected} rows, got {found}")]
    RowCountMismatch { expected: usize, found: usize },

    #[error("embeddings must have at least one dimension")]
    EmptyEmbedding,

    #[error("non-finite value at row {row}, column {col}")]
    NonFiniteValue { row: usize, col: usize },

    #[error("threshold must be a finite number, got {0}")]
    InvalidThreshold(f64),

    #[error("corpus has {found} sentences, limit is {limit}")]
    TooManySentences { found: usize, limit: usize },

    #[error("invalid summarizer spec: {0}")]
    InvalidSpec(String),

    #[error("similarity graph is degenerate (column-sum norm = {norm}); try a lower threshold or none")]
    DegenerateGraph { norm: f64 },

    #[error("embedding provider '{provider}' failed: {source}")]
    Provider {
        provider: String,
        #[source]
        source: ProviderError,
    },

    #[error("no embedding provider registered under '{0}'")]
    UnknownProvider(String),
}

impl LexRankError {
    /// Wrap a provider failure, tagging it with the provider name.
    pub fn provider(provider: impl Into<String>, source: impl Into<ProviderError>) -> Self {
        LexRankError::Provider {
            provider: provider.into(),
            source: source.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            LexRankError::NegativeCount(_)
            | LexRankError::DimensionMismatch { .. }
            | LexRankError::RowCountMismatch { .. }
            | LexRankError::EmptyEmbedding
            | LexRankError::NonFiniteValue { .. }
            | LexRankError::InvalidThreshold(_)
            | LexRankError::TooManySentences { .. }
            | LexRankError::InvalidSpec(_) => ErrorKind::InvalidInput,
            LexRankError::DegenerateGraph { .. } => ErrorKind::DegenerateGraph,
            LexRankError::Provider { .. } | LexRankError::UnknownProvider(_) => {
                ErrorKind::UpstreamProviderFailure
            }
        }
    }
}
