//! Dense similarity matrix
//!
//! The sentence graph is stored as a row-major `N x N` `Vec<f64>`. Edges
//! removed by thresholding are stored as explicit zeros; there is no sparse
//! layout.

/// Square `N x N` similarity matrix
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SimilarityMatrix {
    /// Number of sentences
    pub n: usize,
    /// Row-major entries, `data[i * n + j]` is S[i][j]
    data: Vec<f64>,
}

impl SimilarityMatrix {
    /// Wrap row-major data. `data.len()` must equal `n * n`.
    pub(crate) fn from_raw(n: usize, data: Vec<f64>) -> Self {
        debug_assert_eq!(data.len(), n * n);
        Self { n, data }
    }

    /// Build from nested rows; panics on a non-square input.
    pub fn from_rows(rows: &[Vec<f64>]) -> Self {
        let n = rows.len();
        let mut data = Vec::with_capacity(n * n);
        for row in rows {
            assert_eq!(row.len(), n, "similarity matrix must be square");
            data.extend_from_slice(row);
        }
        Self { n, data }
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n + j]
    }

    /// Row `i` as a slice.
    #[inline]
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Zero every entry strictly below `threshold`, diagonal included.
    ///
    /// `None` leaves the matrix untouched. Returns the number of entries that
    /// were zeroed (entries that were already zero are not counted).
    pub fn apply_threshold(&mut self, threshold: Option<f64>) -> usize {
        let Some(t) = threshold else {
            return 0;
        };

        let mut zeroed = 0;
        for value in &mut self.data {
            if *value < t {
                if *value != 0.0 {
                    zeroed += 1;
                }
                *value = 0.0;
            }
        }
        zeroed
    }

    /// `z[j] = sum_i S[i][j]`
    pub fn column_sums(&self) -> Vec<f64> {
        let mut sums = vec![0.0; self.n];
        for i in 0..self.n {
            for (sum, value) in sums.iter_mut().zip(self.row(i)) {
                *sum += value;
            }
        }
        sums
    }

    /// Number of non-zero entries
    pub fn num_edges(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0.0).count()
    }

    /// Check `|S[i][j] - S[j][i]| <= epsilon` for every pair.
    pub fn is_symmetric(&self, epsilon: f64) -> bool {
        (0..self.n).all(|i| ((i + 1)..self.n).all(|j| (self.get(i, j) - self.get(j, i)).abs() <= epsilon))
    }
}
