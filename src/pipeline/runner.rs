//! Pipeline runner: orchestrates stage execution and artifact flow.
//!
//! [`LexRankPipeline::run`] executes the stages in order, threading artifacts
//! between them and notifying a [`PipelineObserver`] at each boundary:
//!
//! 1. Embed (provider call, shape validation)
//! 2. Similarity (`S = E * E^T`)
//! 3. Threshold (optional sparsification, in place)
//! 4. Score (fast LexRank)
//! 5. Select (top-N)
//!
//! Every run is stateless; a pipeline value can be shared across threads.

use crate::embedding::{embed_corpus, EmbeddingMatrix, EmbeddingProvider};
use crate::errors::{LexRankError, Result};
use crate::graph::builder::SimilarityBuilder;
use crate::lexrank::fast::FastLexRank;
use crate::lexrank::LexRankResult;
use crate::pipeline::observer::{
    PipelineObserver, StageClock, StageReport, StageReportBuilder, STAGE_EMBED, STAGE_SCORE,
    STAGE_SELECT, STAGE_SIMILARITY, STAGE_THRESHOLD,
};
use crate::summarizer::selector::TopNSelector;
use crate::types::LexRankConfig;

// ---------------------------------------------------------------------------
// Conditional tracing support
// ---------------------------------------------------------------------------

/// Enter a tracing span for a pipeline stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("pipeline_stage", stage = $name).entered();
    };
}

/// Scores and the selected indices of one run
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutput {
    /// Per-sentence LexRank scores
    pub result: LexRankResult,
    /// Selected corpus indices, best first
    pub selected: Vec<usize>,
}

/// The embed -> similarity -> threshold -> score -> select pipeline.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexRankPipeline {
    pub similarity: SimilarityBuilder,
    pub scorer: FastLexRank,
    pub selector: TopNSelector,
}

impl LexRankPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the similarity builder (e.g. to turn off parallel fill).
    pub fn with_similarity(mut self, similarity: SimilarityBuilder) -> Self {
        self.similarity = similarity;
        self
    }

    /// Run every stage, starting from raw sentences.
    pub fn run<P>(
        &self,
        corpus: &[String],
        provider: &P,
        cfg: &LexRankConfig,
        observer: &mut impl PipelineObserver,
    ) -> Result<PipelineOutput>
    where
        P: EmbeddingProvider + ?Sized,
    {
        check_config(corpus.len(), cfg)?;

        // Stage 1: Embed
        trace_stage!(STAGE_EMBED);
        observer.on_stage_start(STAGE_EMBED);
        let clock = StageClock::start();
        let embeddings = embed_corpus(provider, corpus)?;
        let report = StageReportBuilder::new(clock.elapsed())
            .sentences(embeddings.num_rows())
            .dimension(embeddings.dim())
            .build();
        observer.on_stage_end(STAGE_EMBED, &report);
        observer.on_embeddings(&embeddings);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            provider = provider.name(),
            sentences = embeddings.num_rows(),
            dim = embeddings.dim(),
            "embedded corpus"
        );

        self.score_embeddings(&embeddings, cfg, observer)
    }

    /// Run the scoring stages on an already materialized embedding matrix.
    pub fn run_embeddings(
        &self,
        embeddings: &EmbeddingMatrix,
        cfg: &LexRankConfig,
        observer: &mut impl PipelineObserver,
    ) -> Result<PipelineOutput> {
        check_config(embeddings.num_rows(), cfg)?;
        self.score_embeddings(embeddings, cfg, observer)
    }

    fn score_embeddings(
        &self,
        embeddings: &EmbeddingMatrix,
        cfg: &LexRankConfig,
        observer: &mut impl PipelineObserver,
    ) -> Result<PipelineOutput> {
        // Stage 2: Similarity
        trace_stage!(STAGE_SIMILARITY);
        observer.on_stage_start(STAGE_SIMILARITY);
        let clock = StageClock::start();
        let mut similarity = self.similarity.build(embeddings);
        let report = StageReportBuilder::new(clock.elapsed())
            .sentences(similarity.n)
            .build();
        observer.on_stage_end(STAGE_SIMILARITY, &report);

        // Stage 3: Threshold (the unthresholded matrix is never exposed)
        trace_stage!(STAGE_THRESHOLD);
        observer.on_stage_start(STAGE_THRESHOLD);
        let clock = StageClock::start();
        let zeroed = similarity.apply_threshold(cfg.threshold);
        let report = StageReportBuilder::new(clock.elapsed())
            .zeroed(zeroed)
            .build();
        observer.on_stage_end(STAGE_THRESHOLD, &report);
        observer.on_similarity(&similarity);

        #[cfg(feature = "tracing")]
        tracing::debug!(threshold = ?cfg.threshold, zeroed, "thresholded similarity graph");

        // Stage 4: Score
        trace_stage!(STAGE_SCORE);
        observer.on_stage_start(STAGE_SCORE);
        let clock = StageClock::start();
        let result = self.scorer.run(&similarity)?;
        let report = StageReportBuilder::new(clock.elapsed())
            .sentences(result.len())
            .norm(result.norm)
            .build();
        observer.on_stage_end(STAGE_SCORE, &report);
        observer.on_scores(&result);

        // Stage 5: Select
        trace_stage!(STAGE_SELECT);
        observer.on_stage_start(STAGE_SELECT);
        let clock = StageClock::start();
        let selected = self.selector.select(&result.scores, cfg.num_sentences);
        let report = StageReport::new(clock.elapsed());
        observer.on_stage_end(STAGE_SELECT, &report);
        observer.on_selection(&selected);

        Ok(PipelineOutput { result, selected })
    }
}

/// Fail fast on configuration problems before doing any work.
fn check_config(num_sentences: usize, cfg: &LexRankConfig) -> Result<()> {
    if let Some(t) = cfg.threshold {
        if !t.is_finite() {
            return Err(LexRankError::InvalidThreshold(t));
        }
    }
    if let Some(limit) = cfg.max_sentences {
        if num_sentences > limit {
            return Err(LexRankError::TooManySentences {
                found: num_sentences,
                limit,
            });
        }
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
