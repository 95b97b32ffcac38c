//! Summarization components
//!
//! Provides extractive summarization by fast LexRank centrality and
//! top-N sentence selection.

pub mod lexrank;
pub mod selector;
