//! Similarity graph construction
//!
//! Turns an embedding matrix into the pairwise inner-product matrix used as
//! the LexRank affinity graph. The inner product is deliberately raw (not
//! divided by vector norms); providers that emit unit vectors get cosine
//! similarity for free.

use rayon::prelude::*;

use super::dense::SimilarityMatrix;
use crate::embedding::EmbeddingMatrix;

/// Below this many sentences the sequential fill is used even when
/// parallelism is enabled.
const PARALLEL_MIN_ROWS: usize = 64;

/// Builds `S = E * E^T`
#[derive(Debug, Clone, Copy)]
pub struct SimilarityBuilder {
    parallel: bool,
}

impl Default for SimilarityBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SimilarityBuilder {
    pub fn new() -> Self {
        Self { parallel: true }
    }

    /// Enable or disable the rayon row fill
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Compute the `N x N` inner-product matrix.
    ///
    /// Only the upper triangle is computed; it is mirrored into the lower one,
    /// so the result is exactly symmetric. Each entry is a sequential sum, so
    /// the output does not depend on thread scheduling.
    pub fn build(&self, embeddings: &EmbeddingMatrix) -> SimilarityMatrix {
        let n = embeddings.num_rows();
        if n == 0 {
            return SimilarityMatrix::default();
        }

        let upper_row = |i: usize| -> Vec<f64> {
            let a = embeddings.row(i);
            (i..n).map(|j| dot(a, embeddings.row(j))).collect()
        };

        let upper: Vec<Vec<f64>> = if self.parallel && n >= PARALLEL_MIN_ROWS {
            (0..n).into_par_iter().map(upper_row).collect()
        } else {
            (0..n).map(upper_row).collect()
        };

        let mut data = vec![0.0; n * n];
        for (i, row) in upper.iter().enumerate() {
            for (offset, &value) in row.iter().enumerate() {
                let j = i + offset;
                data[i * n + j] = value;
                data[j * n + i] = value;
            }
        }

        SimilarityMatrix::from_raw(n, data)
    }
}

#[inline]
fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}
