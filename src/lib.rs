//! # fast_lexrank
//!
//! Extractive summarization with a fast, closed-form LexRank approximation.
//!
//! Sentences are embedded by a pluggable [`EmbeddingProvider`], compared with
//! a raw inner product, optionally sparsified with a similarity threshold,
//! and scored by projecting the normalized column sums of the similarity
//! matrix back through it. The top-N sentences form the summary.
//!
//! ```
//! use fast_lexrank::{FastLexRankSummarizer, HashingEmbedder};
//!
//! let corpus = vec![
//!     "The treasury oversees banks.".to_string(),
//!     "Banks are overseen by the treasury.".to_string(),
//!     "Parliament met on Tuesday.".to_string(),
//! ];
//! let summary = FastLexRankSummarizer::new(corpus, HashingEmbedder::new())
//!     .summarize(2)
//!     .unwrap();
//! assert_eq!(summary.len(), 2);
//! ```

pub mod embedding;
pub mod errors;
pub mod graph;
pub mod lexrank;
pub mod nlp;
pub mod pipeline;
pub mod summarizer;
pub mod types;

// Re-export commonly used types
pub use errors::{ErrorKind, LexRankError, ProviderError, Result};
pub use types::{LexRankConfig, ScoredSentence, DEFAULT_MODEL, DEFAULT_SUMMARY_LENGTH};

// Re-export main functionality
pub use embedding::{
    hashing::HashingEmbedder, registry::ProviderRegistry, EmbeddingMatrix, EmbeddingProvider,
    PrecomputedEmbeddings,
};
pub use graph::{builder::SimilarityBuilder, dense::SimilarityMatrix};
pub use lexrank::{fast::FastLexRank, LexRankResult};
pub use pipeline::runner::LexRankPipeline;
pub use pipeline::spec::SummarizerSpec;
pub use summarizer::{
    lexrank::{summarize, FastLexRankSummarizer},
    selector::TopNSelector,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
