//! Provider registry
//!
//! Resolves the provider reference carried by a
//! [`SummarizerSpec`](crate::pipeline::spec::SummarizerSpec) to a live
//! [`EmbeddingProvider`].

use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::hashing::HashingEmbedder;
use super::EmbeddingProvider;
use crate::errors::{LexRankError, Result};

/// Name -> provider lookup table
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    providers: FxHashMap<String, Arc<dyn EmbeddingProvider>>,
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names = self.names();
        names.sort_unstable();
        f.debug_struct("ProviderRegistry")
            .field("providers", &names)
            .finish()
    }
}

impl ProviderRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in `"hashing"` provider.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(HashingEmbedder::new());
        registry
    }

    /// Register `provider` under its own name, replacing any previous entry.
    pub fn register<P: EmbeddingProvider + 'static>(&mut self, provider: P) {
        let name = provider.name().to_string();
        self.providers.insert(name, Arc::new(provider));
    }

    /// Register `provider` under an alias (e.g. a model path).
    pub fn register_as(&mut self, name: impl Into<String>, provider: Arc<dyn EmbeddingProvider>) {
        self.providers.insert(name.into(), provider);
    }

    pub fn get(&self, name: &str) -> Result<Arc<dyn EmbeddingProvider>> {
        self.providers
            .get(name)
            .cloned()
            .ok_or_else(|| LexRankError::UnknownProvider(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.providers.contains_key(name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.providers.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embedding::PrecomputedEmbeddings;
    use crate::errors::ErrorKind;

    #[test]
    fn test_defaults_contain_hashing() {
        let registry = ProviderRegistry::with_defaults();
        assert!(registry.contains("hashing"));
        assert_eq!(registry.get("hashing").unwrap().name(), "hashing");
    }

    #[test]
    fn test_unknown_provider() {
        let registry = ProviderRegistry::new();
        let err = registry.get("all-MiniLM-L12-v2").err().unwrap();
        assert_eq!(err.kind(), ErrorKind::UpstreamProviderFailure);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_register_as_alias() {
        let mut registry = ProviderRegistry::new();
        registry.register_as(
            "all-MiniLM-L12-v2",
            Arc::new(PrecomputedEmbeddings::new(vec![vec![1.0]])),
        );
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("all-MiniLM-L12-v2").unwrap().name(), "precomputed");
    }

    #[test]
    fn test_debug_lists_names() {
        let registry = ProviderRegistry::with_defaults();
        assert!(format!("{registry:?}").contains("hashing"));
    }
}
