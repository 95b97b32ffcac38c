//! Summarizer specification types.
//!
//! A [`SummarizerSpec`] is the serializable configuration of one summarizer:
//! which embedding provider to use, the optional similarity threshold, the
//! summary length, and runtime limits. It is checked by the
//! [`super::validation::ValidationEngine`] before use.
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "v": 1,
//!   "provider": "all-MiniLM-L12-v2",
//!   "threshold": 0.1,
//!   "n": 3,
//!   "limits": { "max_sentences": 10000 },
//!   "strict": false
//! }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::{LexRankError, Result};
use crate::types::{LexRankConfig, DEFAULT_MODEL, DEFAULT_SUMMARY_LENGTH};

/// Current spec version.
pub const SPEC_VERSION: u32 = 1;

fn default_version() -> u32 {
    SPEC_VERSION
}

fn default_provider() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_n() -> i64 {
    DEFAULT_SUMMARY_LENGTH as i64
}

/// Top-level summarizer specification (v1).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizerSpec {
    /// Spec version (currently `1`).
    #[serde(default = "default_version")]
    pub v: u32,

    /// Embedding provider name, resolved through a
    /// [`ProviderRegistry`](crate::embedding::registry::ProviderRegistry).
    #[serde(default = "default_provider")]
    pub provider: String,

    /// Similarity threshold; entries strictly below it are zeroed.
    #[serde(default)]
    pub threshold: Option<f64>,

    /// Requested summary length. Signed so negative input can be reported
    /// instead of failing deserialization.
    #[serde(default = "default_n")]
    pub n: i64,

    /// Runtime execution limits.
    #[serde(default)]
    pub limits: LimitsSpec,

    /// If `true`, unrecognized fields are errors; if `false`, warnings.
    #[serde(default)]
    pub strict: bool,

    /// Captures any fields not recognized by the schema.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl Default for SummarizerSpec {
    fn default() -> Self {
        Self {
            v: SPEC_VERSION,
            provider: default_provider(),
            threshold: None,
            n: default_n(),
            limits: LimitsSpec::default(),
            strict: false,
            unknown_fields: HashMap::new(),
        }
    }
}

impl SummarizerSpec {
    /// Parse a spec from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| LexRankError::InvalidSpec(e.to_string()))
    }

    /// Convert to runtime parameters.
    ///
    /// Only the checks the conversion itself needs are done here; run the
    /// validation engine first for the full diagnostic list.
    pub fn to_config(&self) -> Result<LexRankConfig> {
        let num_sentences =
            usize::try_from(self.n).map_err(|_| LexRankError::NegativeCount(self.n))?;

        if let Some(t) = self.threshold {
            if !t.is_finite() {
                return Err(LexRankError::InvalidThreshold(t));
            }
        }

        Ok(LexRankConfig {
            threshold: self.threshold,
            num_sentences,
            max_sentences: self.limits.max_sentences,
        })
    }
}

/// Runtime execution limits (fail-fast guards).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LimitsSpec {
    /// Maximum number of corpus sentences before rejecting.
    #[serde(default)]
    pub max_sentences: Option<usize>,

    /// Captures any fields not recognized by the schema.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}
