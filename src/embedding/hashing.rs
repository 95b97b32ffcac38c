//! Feature-hashing embedder
//!
//! A deterministic, model-free [`EmbeddingProvider`]: every non-stopword is
//! hashed into one of `dim` signed buckets. Sentences that share vocabulary
//! get large inner products, which is all LexRank needs. Handy for tests,
//! offline runs, and as a baseline against neural providers.

use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;

use super::EmbeddingProvider;
use crate::errors::ProviderError;
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::words;

pub const DEFAULT_DIM: usize = 256;

/// Hashing-trick sentence embedder
#[derive(Debug, Clone)]
pub struct HashingEmbedder {
    dim: usize,
    normalize: bool,
    stopwords: StopwordFilter,
}

impl Default for HashingEmbedder {
    fn default() -> Self {
        Self::new()
    }
}

impl HashingEmbedder {
    /// 256 buckets, English stopwords, unit-length output.
    pub fn new() -> Self {
        Self {
            dim: DEFAULT_DIM,
            normalize: true,
            stopwords: StopwordFilter::default(),
        }
    }

    /// Set the number of buckets (clamped to at least 1)
    pub fn with_dim(mut self, dim: usize) -> Self {
        self.dim = dim.max(1);
        self
    }

    /// Whether to L2-normalize each vector
    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.stopwords = stopwords;
        self
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Embed one sentence.
    pub fn embed_sentence(&self, sentence: &str) -> Vec<f64> {
        let mut vector = vec![0.0; self.dim];

        for word in words(sentence).filter(|w| !self.stopwords.is_stopword(w)) {
            let mut hasher = FxHasher::default();
            word.hash(&mut hasher);
            let h = hasher.finish();

            let bucket = (h % self.dim as u64) as usize;
            let sign = if h >> 63 == 0 { 1.0 } else { -1.0 };
            vector[bucket] += sign;
        }

        if self.normalize {
            let norm = vector.iter().map(|v| v * v).sum::<f64>().sqrt();
            if norm > 0.0 {
                for v in &mut vector {
                    *v /= norm;
                }
            }
        }

        vector
    }
}

impl EmbeddingProvider for HashingEmbedder {
    fn name(&self) -> &str {
        "hashing"
    }

    fn embed(&self, sentences: &[String]) -> Result<Vec<Vec<f64>>, ProviderError> {
        Ok(sentences.iter().map(|s| self.embed_sentence(s)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dot(a: &[f64], b: &[f64]) -> f64 {
        a.iter().zip(b).map(|(x, y)| x * y).sum()
    }

    #[test]
    fn test_dimension() {
        let e = HashingEmbedder::new().with_dim(32);
        assert_eq!(e.embed_sentence("Osborne became chancellor").len(), 32);
    }

    #[test]
    fn test_zero_dim_is_clamped() {
        let e = HashingEmbedder::new().with_dim(0);
        assert_eq!(e.dim(), 1);
    }

    #[test]
    fn test_unit_length() {
        let e = HashingEmbedder::new();
        let v = e.embed_sentence("The treasury will oversee banks and regulation.");
        assert!((dot(&v, &v) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_only_stopwords_gives_zero_vector() {
        let e = HashingEmbedder::new();
        let v = e.embed_sentence("the and of");
        assert!(v.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_identical_sentences_identical_vectors() {
        let e = HashingEmbedder::new();
        assert_eq!(
            e.embed_sentence("Bank regulation reform"),
            e.embed_sentence("bank REGULATION, reform!")
        );
    }

    #[test]
    fn test_shared_vocabulary_scores_higher() {
        let e = HashingEmbedder::new().with_dim(1024);
        let a = e.embed_sentence("chancellor osborne treasury banks");
        let b = e.embed_sentence("osborne treasury banks regulation");
        let c = e.embed_sentence("agriculture department adviser parliament");
        assert!(dot(&a, &b) > dot(&a, &c));
    }

    #[test]
    fn test_provider_preserves_order() {
        let e = HashingEmbedder::new();
        let sentences = vec!["first one".to_string(), "second one".to_string()];
        let out = e.embed(&sentences).unwrap();
        assert_eq!(out.len(), 2);
        assert_eq!(out[0], e.embed_sentence("first one"));
        assert_eq!(out[1], e.embed_sentence("second one"));
    }
}
