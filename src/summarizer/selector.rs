//! Top-N sentence selection
//!
//! Picks the highest-scoring sentences from a LexRank score vector.

/// Ranks sentence indices by score
///
/// Ordering is by descending score; equal scores keep ascending corpus
/// order (stable sort). `-0.0` and `0.0` count as equal. Scores are
/// otherwise compared with `f64::total_cmp`, so the order is total even if a
/// caller passes NaN.
#[derive(Debug, Clone, Copy, Default)]
pub struct TopNSelector;

impl TopNSelector {
    pub fn new() -> Self {
        Self
    }

    /// Every index `0..scores.len()`, best first.
    pub fn rank(&self, scores: &[f64]) -> Vec<usize> {
        let mut order: Vec<usize> = (0..scores.len()).collect();
        // `+ 0.0` folds -0.0 into 0.0
        order.sort_by(|&a, &b| (scores[b] + 0.0).total_cmp(&(scores[a] + 0.0)));
        order
    }

    /// The `n` best indices, best first.
    ///
    /// `n` larger than the number of scores is clamped silently; `n == 0`
    /// returns an empty list.
    pub fn select(&self, scores: &[f64], n: usize) -> Vec<usize> {
        if n == 0 {
            return Vec::new();
        }
        let mut order = self.rank(scores);
        order.truncate(n);
        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descending_order() {
        let top = TopNSelector::new().select(&[0.1, 0.9, 0.5], 3);
        assert_eq!(top, vec![1, 2, 0]);
    }

    #[test]
    fn test_ties_prefer_lower_index() {
        let top = TopNSelector::new().select(&[0.3, 0.7, 0.7, 0.7], 2);
        assert_eq!(top, vec![1, 2]);
    }

    #[test]
    fn test_signed_zero_ties_prefer_lower_index() {
        assert_eq!(TopNSelector::new().select(&[-0.0, 0.0], 1), vec![0]);
        assert_eq!(TopNSelector::new().rank(&[0.0, -0.0, 1.0]), vec![2, 0, 1]);
    }

    #[test]
    fn test_zero_requested() {
        assert!(TopNSelector::new().select(&[1.0, 2.0], 0).is_empty());
    }

    #[test]
    fn test_clamps_to_available() {
        let top = TopNSelector::new().select(&[1.0, 2.0], 10);
        assert_eq!(top, vec![1, 0]);
    }

    #[test]
    fn test_empty_scores() {
        assert!(TopNSelector::new().select(&[], 3).is_empty());
        assert!(TopNSelector::new().rank(&[]).is_empty());
    }

    #[test]
    fn test_negative_scores() {
        let top = TopNSelector::new().select(&[-1.0, -0.5, -2.0], 2);
        assert_eq!(top, vec![1, 0]);
    }
}
