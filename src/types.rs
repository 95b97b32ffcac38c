//! Shared types and defaults

use serde::{Deserialize, Serialize};

/// Number of sentences returned when the caller does not ask for a count.
pub const DEFAULT_SUMMARY_LENGTH: usize = 3;

/// Provider name used when a spec does not name one.
pub const DEFAULT_MODEL: &str = "all-MiniLM-L12-v2";

/// A sentence picked for the summary, with its position in the corpus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredSentence {
    /// Index into the original corpus
    pub index: usize,
    /// The sentence text, unmodified
    pub text: String,
    /// LexRank score
    pub score: f64,
}

/// Per-run summarization parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct LexRankConfig {
    /// Entries of the similarity matrix strictly below this are zeroed.
    pub threshold: Option<f64>,
    /// Number of sentences to return
    pub num_sentences: usize,
    /// Reject corpora larger than this.
    pub max_sentences: Option<usize>,
}

impl Default for LexRankConfig {
    fn default() -> Self {
        Self {
            threshold: None,
            num_sentences: DEFAULT_SUMMARY_LENGTH,
            max_sentences: None,
        }
    }
}

impl LexRankConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = Some(threshold);
        self
    }

    pub fn with_num_sentences(mut self, n: usize) -> Self {
        self.num_sentences = n;
        self
    }

    pub fn with_max_sentences(mut self, limit: usize) -> Self {
        self.max_sentences = Some(limit);
        self
    }
}
