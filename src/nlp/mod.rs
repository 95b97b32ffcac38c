//! Natural Language Processing components
//!
//! Minimal text handling used by the built-in hashing embedder.

pub mod stopwords;
pub mod tokenizer;
