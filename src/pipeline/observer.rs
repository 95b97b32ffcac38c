//! Pipeline observer: hooks for logging, profiling, and debugging.
//!
//! Observers receive notifications at stage boundaries without coupling to
//! stage logic. Use cases include timing stages, capturing intermediate
//! artifacts (embeddings, similarity matrix, scores) for debugging, and
//! emitting structured telemetry.

use std::time::{Duration, Instant};

use crate::embedding::EmbeddingMatrix;
use crate::graph::dense::SimilarityMatrix;
use crate::lexrank::LexRankResult;

pub const STAGE_EMBED: &str = "embed";
pub const STAGE_SIMILARITY: &str = "similarity";
pub const STAGE_THRESHOLD: &str = "threshold";
pub const STAGE_SCORE: &str = "score";
pub const STAGE_SELECT: &str = "select";

/// Stage names in execution order.
pub const STAGES: [&str; 5] = [
    STAGE_EMBED,
    STAGE_SIMILARITY,
    STAGE_THRESHOLD,
    STAGE_SCORE,
    STAGE_SELECT,
];

/// Receives stage and artifact callbacks. Every method defaults to a no-op.
pub trait PipelineObserver {
    fn on_stage_start(&mut self, _stage: &'static str) {}

    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}

    fn on_embeddings(&mut self, _embeddings: &EmbeddingMatrix) {}

    /// Called with the matrix after thresholding.
    fn on_similarity(&mut self, _similarity: &SimilarityMatrix) {}

    fn on_scores(&mut self, _result: &LexRankResult) {}

    fn on_selection(&mut self, _indices: &[usize]) {}
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Wall-clock timer for one stage
#[derive(Debug, Clone, Copy)]
pub struct StageClock {
    start: Instant,
}

impl StageClock {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// What happened during one stage.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StageReport {
    elapsed: Duration,
    sentences: Option<usize>,
    dimension: Option<usize>,
    zeroed: Option<usize>,
    norm: Option<f64>,
}

impl StageReport {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            elapsed,
            ..Self::default()
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn sentences(&self) -> Option<usize> {
        self.sentences
    }

    /// Embedding dimension (embed stage)
    pub fn dimension(&self) -> Option<usize> {
        self.dimension
    }

    /// Entries zeroed by the threshold (threshold stage)
    pub fn zeroed(&self) -> Option<usize> {
        self.zeroed
    }

    /// Column-sum norm (score stage)
    pub fn norm(&self) -> Option<f64> {
        self.norm
    }
}

/// Fluent construction of a [`StageReport`].
#[derive(Debug, Clone)]
pub struct StageReportBuilder {
    report: StageReport,
}

impl StageReportBuilder {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            report: StageReport::new(elapsed),
        }
    }

    pub fn sentences(mut self, n: usize) -> Self {
        self.report.sentences = Some(n);
        self
    }

    pub fn dimension(mut self, d: usize) -> Self {
        self.report.dimension = Some(d);
        self
    }

    pub fn zeroed(mut self, z: usize) -> Self {
        self.report.zeroed = Some(z);
        self
    }

    pub fn norm(mut self, norm: f64) -> Self {
        self.report.norm = Some(norm);
        self
    }

    pub fn build(self) -> StageReport {
        self.report
    }
}

/// Collects `(stage, report)` pairs in execution order.
#[derive(Debug, Clone, Default)]
pub struct StageTimingObserver {
    reports: Vec<(&'static str, StageReport)>,
}

impl StageTimingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> &[(&'static str, StageReport)] {
        &self.reports
    }

    /// Report for `stage`, if it ran.
    pub fn report(&self, stage: &str) -> Option<&StageReport> {
        self.reports
            .iter()
            .find(|(name, _)| *name == stage)
            .map(|(_, r)| r)
    }

    /// Sum of all stage durations
    pub fn total(&self) -> Duration {
        self.reports.iter().map(|(_, r)| r.elapsed()).sum()
    }
}

impl PipelineObserver for StageTimingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.reports.push((stage, report.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sets_fields() {
        let report = StageReportBuilder::new(Duration::from_millis(3))
            .sentences(4)
            .dimension(8)
            .zeroed(2)
            .norm(1.5)
            .build();

        assert_eq!(report.elapsed(), Duration::from_millis(3));
        assert_eq!(report.sentences(), Some(4));
        assert_eq!(report.dimension(), Some(8));
        assert_eq!(report.zeroed(), Some(2));
        assert_eq!(report.norm(), Some(1.5));
    }

    #[test]
    fn test_plain_report_has_no_metrics() {
        let report = StageReport::new(Duration::ZERO);
        assert!(report.sentences().is_none());
        assert!(report.norm().is_none());
    }

    #[test]
    fn test_timing_observer_records_in_order() {
        let mut obs = StageTimingObserver::new();
        obs.on_stage_end(STAGE_EMBED, &StageReport::new(Duration::from_millis(1)));
        obs.on_stage_end(STAGE_SCORE, &StageReport::new(Duration::from_millis(2)));

        let names: Vec<_> = obs.reports().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec![STAGE_EMBED, STAGE_SCORE]);
        assert_eq!(obs.total(), Duration::from_millis(3));
        assert!(obs.report(STAGE_SELECT).is_none());
    }
}
