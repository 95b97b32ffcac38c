//! LexRank centrality
//!
//! This module provides the fast closed-form LexRank approximation.

pub mod fast;

use crate::summarizer::selector::TopNSelector;

/// Result of a LexRank computation
#[derive(Debug, Clone, PartialEq)]
pub struct LexRankResult {
    /// Score for each sentence (indexed by corpus position)
    pub scores: Vec<f64>,
    /// L2 norm of the column-sum vector used for normalization
    pub norm: f64,
}

impl LexRankResult {
    pub fn new(scores: Vec<f64>, norm: f64) -> Self {
        Self { scores, norm }
    }

    /// Empty result for a zero-sentence corpus
    pub fn empty() -> Self {
        Self::new(Vec::new(), 0.0)
    }

    /// Top `n` sentences by score, highest first, ties to the lower index.
    pub fn top_n(&self, n: usize) -> Vec<(usize, f64)> {
        TopNSelector::new()
            .select(&self.scores, n)
            .into_iter()
            .map(|i| (i, self.scores[i]))
            .collect()
    }

    /// Score for sentence `i`, 0.0 when out of range
    pub fn score(&self, i: usize) -> f64 {
        self.scores.get(i).copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}
