//! Fast LexRank extractive summarizer
//!
//! Ties a corpus, an embedding provider and the scoring pipeline together.
//! The returned summary is a subsequence of the corpus in descending-score
//! order; sentences are never edited, merged, or deduplicated.

use std::sync::Arc;

use crate::embedding::registry::ProviderRegistry;
use crate::embedding::EmbeddingProvider;
use crate::errors::{LexRankError, Result};
use crate::pipeline::observer::{NoopObserver, PipelineObserver};
use crate::pipeline::runner::{LexRankPipeline, PipelineOutput};
use crate::pipeline::spec::SummarizerSpec;
use crate::pipeline::validation::ValidationEngine;
use crate::types::{LexRankConfig, ScoredSentence};

/// Summarizer over one fixed corpus
#[derive(Clone)]
pub struct FastLexRankSummarizer {
    corpus: Vec<String>,
    provider: Arc<dyn EmbeddingProvider>,
    config: LexRankConfig,
    pipeline: LexRankPipeline,
}

impl std::fmt::Debug for FastLexRankSummarizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FastLexRankSummarizer")
            .field("sentences", &self.corpus.len())
            .field("provider", &self.provider.name())
            .field("threshold", &self.config.threshold)
            .field("num_sentences", &self.config.num_sentences)
            .finish()
    }
}

impl FastLexRankSummarizer {
    /// Create a summarizer with the default config (no threshold, 3 sentences).
    pub fn new<P>(corpus: Vec<String>, provider: P) -> Self
    where
        P: EmbeddingProvider + 'static,
    {
        Self::with_provider(corpus, Arc::new(provider))
    }

    /// Create from a shared provider handle.
    pub fn with_provider(corpus: Vec<String>, provider: Arc<dyn EmbeddingProvider>) -> Self {
        Self {
            corpus,
            provider,
            config: LexRankConfig::default(),
            pipeline: LexRankPipeline::default(),
        }
    }

    /// Build from a validated spec, resolving the provider by name.
    ///
    /// All spec errors are reported together in one
    /// [`LexRankError::InvalidSpec`]; negative `n` maps to
    /// [`LexRankError::NegativeCount`].
    pub fn from_spec(
        corpus: Vec<String>,
        spec: &SummarizerSpec,
        registry: &ProviderRegistry,
    ) -> Result<Self> {
        if spec.n < 0 {
            return Err(LexRankError::NegativeCount(spec.n));
        }

        let report = ValidationEngine::with_defaults().validate(spec);
        if report.has_errors() {
            return Err(LexRankError::InvalidSpec(report.error_summary()));
        }
        #[cfg(feature = "tracing")]
        for warning in report.warnings() {
            tracing::warn!(%warning, "summarizer spec warning");
        }

        let config = spec.to_config()?;
        let provider = registry.get(&spec.provider)?;

        Ok(Self::with_provider(corpus, provider).with_config(config))
    }

    /// Replace the whole runtime config
    pub fn with_config(mut self, config: LexRankConfig) -> Self {
        self.config = config;
        self
    }

    /// Zero similarities strictly below `threshold`
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.config.threshold = Some(threshold);
        self
    }

    /// Default summary length used by [`Self::summarize_default`]
    pub fn with_num_sentences(mut self, n: usize) -> Self {
        self.config.num_sentences = n;
        self
    }

    pub fn with_pipeline(mut self, pipeline: LexRankPipeline) -> Self {
        self.pipeline = pipeline;
        self
    }

    pub fn corpus(&self) -> &[String] {
        &self.corpus
    }

    pub fn config(&self) -> &LexRankConfig {
        &self.config
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// LexRank score of every sentence, in corpus order.
    pub fn lexrank_scores(&self) -> Result<Vec<f64>> {
        let out = self.run(0, &mut NoopObserver)?;
        Ok(out.result.scores)
    }

    /// The `n` most central sentences, highest score first.
    pub fn summarize(&self, n: usize) -> Result<Vec<String>> {
        Ok(self
            .summarize_scored(n)?
            .into_iter()
            .map(|s| s.text)
            .collect())
    }

    /// [`Self::summarize`] with the configured length (3 unless changed).
    pub fn summarize_default(&self) -> Result<Vec<String>> {
        self.summarize(self.config.num_sentences)
    }

    /// Signed-count entry point for callers holding untrusted input.
    ///
    /// Negative `n` fails with [`LexRankError::NegativeCount`] before the
    /// provider is called.
    pub fn summarize_count(&self, n: i64) -> Result<Vec<String>> {
        let n = usize::try_from(n).map_err(|_| LexRankError::NegativeCount(n))?;
        self.summarize(n)
    }

    /// Selected sentences with their index and score.
    pub fn summarize_scored(&self, n: usize) -> Result<Vec<ScoredSentence>> {
        self.summarize_observed(n, &mut NoopObserver)
    }

    /// Like [`Self::summarize_scored`] but reports stages to `observer`.
    pub fn summarize_observed(
        &self,
        n: usize,
        observer: &mut impl PipelineObserver,
    ) -> Result<Vec<ScoredSentence>> {
        let out = self.run(n, observer)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            requested = n,
            selected = out.selected.len(),
            sentences = self.corpus.len(),
            "summary selected"
        );

        Ok(out
            .selected
            .iter()
            .map(|&index| ScoredSentence {
                index,
                text: self.corpus[index].clone(),
                score: out.result.scores[index],
            })
            .collect())
    }

    fn run(&self, n: usize, observer: &mut impl PipelineObserver) -> Result<PipelineOutput> {
        let cfg = LexRankConfig {
            num_sentences: n,
            ..self.config.clone()
        };
        self.pipeline
            .run(&self.corpus, self.provider.as_ref(), &cfg, observer)
    }
}

/// One-shot helper: summarize `corpus` with `provider`.
pub fn summarize<P>(
    corpus: &[String],
    provider: &P,
    threshold: Option<f64>,
    n: usize,
) -> Result<Vec<String>>
where
    P: EmbeddingProvider + ?Sized,
{
    let cfg = LexRankConfig {
        threshold,
        num_sentences: n,
        max_sentences: None,
    };
    let out = LexRankPipeline::new().run(corpus, provider, &cfg, &mut NoopObserver)?;
    Ok(out.selected.iter().map(|&i| corpus[i].clone()).collect())
}
