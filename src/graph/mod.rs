//! Sentence similarity graph
//!
//! Construction of the dense inner-product matrix and its threshold-based
//! sparsification.

pub mod builder;
pub mod dense;
