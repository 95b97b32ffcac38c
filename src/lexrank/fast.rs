//! Fast LexRank
//!
//! Classical LexRank finds the stationary distribution of a Markov chain on
//! the sentence graph by power iteration. This variant replaces the iteration
//! with a single projection:
//!
//! ```text
//! z      = column sums of S
//! z_hat  = z / ||z||_2
//! score  = z_hat^T . S^T       (score[i] = sum_j z_hat[j] * S[i][j])
//! ```
//!
//! One `O(N^2)` pass instead of `k` of them, and no convergence test.

use super::LexRankResult;
use crate::errors::{LexRankError, Result};
use crate::graph::dense::SimilarityMatrix;

/// Closed-form LexRank scorer
#[derive(Debug, Clone, Copy, Default)]
pub struct FastLexRank;

impl FastLexRank {
    pub fn new() -> Self {
        Self
    }

    /// Score every sentence of an already thresholded similarity matrix.
    ///
    /// An empty matrix yields an empty result. A matrix whose column sums have
    /// zero (or non-finite) L2 norm fails with
    /// [`LexRankError::DegenerateGraph`] instead of producing NaN scores.
    pub fn run(&self, similarity: &SimilarityMatrix) -> Result<LexRankResult> {
        let n = similarity.n;
        if n == 0 {
            return Ok(LexRankResult::empty());
        }

        let z = similarity.column_sums();
        let norm = l2_norm(&z);
        if norm == 0.0 || !norm.is_finite() {
            #[cfg(feature = "tracing")]
            tracing::debug!(sentences = n, norm, "degenerate similarity graph");
            return Err(LexRankError::DegenerateGraph { norm });
        }

        let z_hat: Vec<f64> = z.iter().map(|v| v / norm).collect();

        let scores: Vec<f64> = (0..n)
            .map(|i| {
                similarity
                    .row(i)
                    .iter()
                    .zip(&z_hat)
                    .map(|(s, w)| w * s)
                    .sum()
            })
            .collect();

        #[cfg(feature = "tracing")]
        tracing::debug!(sentences = n, norm, "scored sentences");

        Ok(LexRankResult::new(scores, norm))
    }
}

/// L2 norm scaled by the largest magnitude, so finite inputs whose squares
/// overflow still give a finite norm. NaN or infinite entries give NaN/inf.
fn l2_norm(values: &[f64]) -> f64 {
    let scale = values.iter().fold(0.0f64, |m, v| m.max(v.abs()));
    if scale == 0.0 || !scale.is_finite() {
        return scale;
    }
    if values.iter().any(|v| v.is_nan()) {
        return f64::NAN;
    }
    scale
        * values
            .iter()
            .map(|v| {
                let r = v / scale;
                r * r
            })
            .sum::<f64>()
            .sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    fn reference_matrix() -> SimilarityMatrix {
        SimilarityMatrix::from_rows(&[
            vec![1.0, 1.0, 0.0],
            vec![1.0, 1.0, 0.0],
            vec![0.0, 0.0, 1.0],
        ])
    }

    #[test]
    fn test_reference_scores() {
        let result = FastLexRank::new().run(&reference_matrix()).unwrap();

        assert!((result.norm - 3.0).abs() < 1e-12);
        assert_eq!(result.len(), 3);
        assert!((result.scores[0] - 4.0 / 3.0).abs() < 1e-12);
        assert!((result.scores[1] - 4.0 / 3.0).abs() < 1e-12);
        assert!((result.scores[2] - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_reference_top_two() {
        let result = FastLexRank::new().run(&reference_matrix()).unwrap();
        let top: Vec<usize> = result.top_n(2).into_iter().map(|(i, _)| i).collect();
        assert_eq!(top, vec![0, 1]);
    }

    #[test]
    fn test_empty_matrix_is_not_an_error() {
        let result = FastLexRank::new().run(&SimilarityMatrix::default()).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_all_zero_matrix_is_degenerate() {
        let m = SimilarityMatrix::from_rows(&[vec![0.0, 0.0], vec![0.0, 0.0]]);
        let err = FastLexRank::new().run(&m).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DegenerateGraph);
    }

    #[test]
    fn test_huge_column_sums_are_not_degenerate() {
        // Squaring these column sums overflows, but their norm is finite.
        let e = crate::embedding::EmbeddingMatrix::from_rows(vec![
            vec![1e80],
            vec![2e80],
            vec![1e79],
        ])
        .unwrap();
        let s = crate::graph::builder::SimilarityBuilder::new().build(&e);
        let result = FastLexRank::new().run(&s).unwrap();

        assert!(result.norm.is_finite());
        assert!(result.scores.iter().all(|v| v.is_finite()));
        let top: Vec<usize> = result.top_n(3).into_iter().map(|(i, _)| i).collect();
        assert_eq!(top, vec![1, 0, 2]);
    }

    #[test]
    fn test_infinite_column_sums_are_degenerate() {
        let m = SimilarityMatrix::from_rows(&[vec![f64::MAX, f64::MAX], vec![f64::MAX, f64::MAX]]);
        let err = FastLexRank::new().run(&m).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DegenerateGraph);
    }

    #[test]
    fn test_isolated_self_similarities() {
        // Only the diagonal survives: score[i] = z_hat[i] * S[i][i]
        let m = SimilarityMatrix::from_rows(&[
            vec![1.0, 0.0, 0.0],
            vec![0.0, 2.0, 0.0],
            vec![0.0, 0.0, 2.0],
        ]);
        let result = FastLexRank::new().run(&m).unwrap();

        assert!((result.norm - 3.0).abs() < 1e-12);
        assert!((result.scores[0] - 1.0 / 3.0).abs() < 1e-12);
        assert!((result.scores[1] - 4.0 / 3.0).abs() < 1e-12);
        assert!((result.scores[2] - 4.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_projects_through_transpose() {
        // Asymmetric input: score[i] uses row i of S, weighted by column sums.
        let m = SimilarityMatrix::from_rows(&[vec![1.0, 3.0], vec![0.0, 1.0]]);
        let result = FastLexRank::new().run(&m).unwrap();

        // z = [1, 4], ||z|| = sqrt(17)
        let norm = 17f64.sqrt();
        assert!((result.scores[0] - (1.0 + 12.0) / norm).abs() < 1e-12);
        assert!((result.scores[1] - 4.0 / norm).abs() < 1e-12);
    }

    #[test]
    fn test_score_accessor_out_of_range() {
        let result = FastLexRank::new().run(&reference_matrix()).unwrap();
        assert_eq!(result.score(10), 0.0);
    }
}
