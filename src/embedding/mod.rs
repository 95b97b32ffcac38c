//! Sentence embeddings
//!
//! The scorer never talks to a model directly. It asks an
//! [`EmbeddingProvider`] for one vector per sentence and packs the answer
//! into a validated, dense [`EmbeddingMatrix`].

pub mod hashing;
pub mod registry;

use crate::errors::{LexRankError, ProviderError, Result};

/// Maps an ordered batch of sentences to one fixed-length vector each.
///
/// # Contract
///
/// - The returned vector count equals `sentences.len()` and the order matches.
/// - Every vector has the same provider-defined dimension `D >= 1`.
/// - Failures (model missing, inference error) are returned, never panicked;
///   the pipeline surfaces them unchanged.
pub trait EmbeddingProvider: Send + Sync {
    /// Stable name used for registry lookup and error messages.
    fn name(&self) -> &str;

    /// Embed the sentences in order.
    fn embed(&self, sentences: &[String]) -> std::result::Result<Vec<Vec<f64>>, ProviderError>;
}

impl<P: EmbeddingProvider + ?Sized> EmbeddingProvider for std::sync::Arc<P> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn embed(&self, sentences: &[String]) -> std::result::Result<Vec<Vec<f64>>, ProviderError> {
        (**self).embed(sentences)
    }
}

/// Dense row-major `N x D` embedding matrix.
///
/// Rows are guaranteed to share one dimension and hold only finite values.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddingMatrix {
    rows: usize,
    dim: usize,
    data: Vec<f64>,
}

impl EmbeddingMatrix {
    /// An empty matrix (zero sentences).
    pub fn empty() -> Self {
        Self {
            rows: 0,
            dim: 0,
            data: Vec::new(),
        }
    }

    /// Pack provider output into a matrix, checking shape and values.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let Some(first) = rows.first() else {
            return Ok(Self::empty());
        };
        let dim = first.len();
        if dim == 0 {
            return Err(LexRankError::EmptyEmbedding);
        }

        let mut data = Vec::with_capacity(rows.len() * dim);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != dim {
                return Err(LexRankError::DimensionMismatch {
                    row,
                    expected: dim,
                    found: values.len(),
                });
            }
            if let Some(col) = values.iter().position(|v| !v.is_finite()) {
                return Err(LexRankError::NonFiniteValue { row, col });
            }
            data.extend_from_slice(values);
        }

        Ok(Self {
            rows: rows.len(),
            dim,
            data,
        })
    }

    /// Number of sentences (rows)
    pub fn num_rows(&self) -> usize {
        self.rows
    }

    /// Embedding dimension (0 for an empty matrix)
    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Row `i` as a slice.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.dim..(i + 1) * self.dim]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        (0..self.rows).map(move |i| self.row(i))
    }
}

/// Run `provider` over `sentences` and validate the result against the corpus.
pub fn embed_corpus<P>(provider: &P, sentences: &[String]) -> Result<EmbeddingMatrix>
where
    P: EmbeddingProvider + ?Sized,
{
    if sentences.is_empty() {
        return Ok(EmbeddingMatrix::empty());
    }

    let vectors = provider
        .embed(sentences)
        .map_err(|source| LexRankError::provider(provider.name(), source))?;

    if vectors.len() != sentences.len() {
        return Err(LexRankError::RowCountMismatch {
            expected: sentences.len(),
            found: vectors.len(),
        });
    }

    EmbeddingMatrix::from_rows(vectors)
}

/// Provider that hands back vectors computed elsewhere.
///
/// Useful when a model already ran upstream. The number of sentences must
/// match the number of stored vectors.
#[derive(Debug, Clone)]
pub struct PrecomputedEmbeddings {
    name: String,
    vectors: Vec<Vec<f64>>,
}

impl PrecomputedEmbeddings {
    pub fn new(vectors: Vec<Vec<f64>>) -> Self {
        Self {
            name: "precomputed".to_string(),
            vectors,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl EmbeddingProvider for PrecomputedEmbeddings {
    fn name(&self) -> &str {
        &self.name
    }

    fn embed(&self, sentences: &[String]) -> std::result::Result<Vec<Vec<f64>>, ProviderError> {
        if sentences.len() != self.vectors.len() {
            return Err(format!(
                "{} sentences requested but {} vectors are stored",
                sentences.len(),
                self.vectors.len()
            )
            .into());
        }
        Ok(self.vectors.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    struct FailingProvider;

    impl EmbeddingProvider for FailingProvider {
        fn name(&self) -> &str {
            "broken"
        }

        fn embed(&self, _: &[String]) -> std::result::Result<Vec<Vec<f64>>, ProviderError> {
            Err("model unavailable".into())
        }
    }

    fn corpus(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("sentence {i}")).collect()
    }

    #[test]
    fn test_from_rows_shape() {
        let m = EmbeddingMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(m.num_rows(), 2);
        assert_eq!(m.dim(), 2);
        assert_eq!(m.row(1), &[3.0, 4.0]);
    }

    #[test]
    fn test_from_rows_empty() {
        let m = EmbeddingMatrix::from_rows(vec![]).unwrap();
        assert!(m.is_empty());
        assert_eq!(m.rows().count(), 0);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = EmbeddingMatrix::from_rows(vec![vec![1.0, 0.0], vec![1.0]]).unwrap_err();
        assert!(matches!(
            err,
            LexRankError::DimensionMismatch {
                row: 1,
                expected: 2,
                found: 1
            }
        ));
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let err = EmbeddingMatrix::from_rows(vec![vec![], vec![]]).unwrap_err();
        assert!(matches!(err, LexRankError::EmptyEmbedding));
    }

    #[test]
    fn test_nan_rejected() {
        let err = EmbeddingMatrix::from_rows(vec![vec![1.0, f64::NAN]]).unwrap_err();
        assert!(matches!(err, LexRankError::NonFiniteValue { row: 0, col: 1 }));
    }

    #[test]
    fn test_embed_corpus_propagates_provider_failure() {
        let err = embed_corpus(&FailingProvider, &corpus(2)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UpstreamProviderFailure);
        assert!(err.to_string().contains("model unavailable"));
    }

    #[test]
    fn test_embed_corpus_skips_provider_for_empty_corpus() {
        let m = embed_corpus(&FailingProvider, &[]).unwrap();
        assert!(m.is_empty());
    }

    #[test]
    fn test_precomputed_count_mismatch_is_provider_failure() {
        let provider = PrecomputedEmbeddings::new(vec![vec![1.0]]);
        let err = embed_corpus(&provider, &corpus(3)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UpstreamProviderFailure);
    }

    #[test]
    fn test_short_provider_output_is_row_mismatch() {
        struct Short;
        impl EmbeddingProvider for Short {
            fn name(&self) -> &str {
                "short"
            }
            fn embed(&self, _: &[String]) -> std::result::Result<Vec<Vec<f64>>, ProviderError> {
                Ok(vec![vec![1.0]])
            }
        }

        let err = embed_corpus(&Short, &corpus(2)).unwrap_err();
        assert!(matches!(
            err,
            LexRankError::RowCountMismatch {
                expected: 2,
                found: 1
            }
        ));
    }
}
