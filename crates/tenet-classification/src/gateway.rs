//! Classification gateway.
//!
//! Every response from the wrapped capability is normalized and checked
//! against the vocabulary the caller supplied. An answer outside the
//! vocabulary is an error naming the raw response; there is no default
//! substitution.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use rayon::prelude::*;
use tenet_core::config::ClassificationConfig;
use tenet_core::errors::{ClassificationError, TenetError, TenetResult};
use tenet_core::models::{Dimension, Vocabulary};
use tenet_core::traits::ICategoryClassifier;
use tracing::{debug, warn};

use crate::cache::ClassificationCache;
use crate::normalize::normalize_response;
use crate::vocabulary::dimension_vocabulary;

/// One item of a batched classification.
#[derive(Debug, Clone, Copy)]
pub struct ClassificationRequest<'a> {
    pub text: &'a str,
    pub vocabulary: &'a Vocabulary,
}

/// Counters since construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GatewayStats {
    pub attempts: u64,
    pub failures: u64,
    pub cache_hits: u64,
}

pub struct ClassificationGateway {
    classifier: Arc<dyn ICategoryClassifier>,
    cache: Option<ClassificationCache>,
    pool: rayon::ThreadPool,
    dimensions: Vocabulary,
    attempts: AtomicU64,
    failures: AtomicU64,
    cache_hits: AtomicU64,
}

impl ClassificationGateway {
    pub fn new(
        classifier: Arc<dyn ICategoryClassifier>,
        config: &ClassificationConfig,
    ) -> TenetResult<Self> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.max_concurrency.max(1))
            .thread_name(|i| format!("tenet-classify-{i}"))
            .build()
            .map_err(|e| TenetError::ConfigError(format!("classification pool: {e}")))?;
        let cache = (config.cache_capacity > 0)
            .then(|| ClassificationCache::new(config.cache_capacity));

        Ok(Self {
            classifier,
            cache,
            pool,
            dimensions: dimension_vocabulary(),
            attempts: AtomicU64::new(0),
            failures: AtomicU64::new(0),
            cache_hits: AtomicU64::new(0),
        })
    }

    pub fn classifier_name(&self) -> &str {
        self.classifier.name()
    }

    /// Classify `text` against `vocabulary`, returning a label of that vocabulary.
    pub fn classify(&self, text: &str, vocabulary: &Vocabulary) -> Result<String, ClassificationError> {
        if vocabulary.is_empty() {
            return Err(ClassificationError::EmptyVocabulary {
                vocabulary: vocabulary.name.clone(),
            });
        }

        let key = self
            .cache
            .as_ref()
            .map(|_| ClassificationCache::key(vocabulary, text));
        if let (Some(cache), Some(key)) = (&self.cache, &key) {
            if let Some(label) = cache.get(key) {
                self.cache_hits.fetch_add(1, Ordering::Relaxed);
                return Ok(label);
            }
        }

        self.attempts.fetch_add(1, Ordering::Relaxed);
        let result = self
            .classifier
            .classify(text, vocabulary)
            .and_then(|raw| validate_response(&raw, vocabulary));

        match &result {
            Ok(label) => {
                debug!(vocabulary = %vocabulary.name, label = %label, "classified");
                if let (Some(cache), Some(key)) = (&self.cache, key) {
                    cache.insert(key, label.clone());
                }
            }
            Err(e) => {
                self.failures.fetch_add(1, Ordering::Relaxed);
                warn!(vocabulary = %vocabulary.name, error = %e, "classification failed");
            }
        }
        result
    }

    /// Classify the semantic dimension of `text`.
    pub fn classify_dimension(&self, text: &str) -> Result<Dimension, ClassificationError> {
        let label = self.classify(text, &self.dimensions)?;
        label
            .parse()
            .map_err(|_| ClassificationError::OutOfVocabulary {
                raw: label,
                vocabulary: self.dimensions.name.clone(),
            })
    }

    /// Classify many requests on the bounded pool. Results are in input
    /// order and independent of each other.
    pub fn classify_batch(
        &self,
        requests: &[ClassificationRequest<'_>],
    ) -> Vec<Result<String, ClassificationError>> {
        let _span = tenet_observability::classification_span!("mixed", requests.len()).entered();
        self.pool.install(|| {
            requests
                .par_iter()
                .map(|r| self.classify(r.text, r.vocabulary))
                .collect()
        })
    }

    /// Batch form of [`classify_dimension`](Self::classify_dimension).
    pub fn classify_dimensions(
        &self,
        texts: &[&str],
    ) -> Vec<Result<Dimension, ClassificationError>> {
        let _span =
            tenet_observability::classification_span!(self.dimensions.name, texts.len()).entered();
        self.pool.install(|| {
            texts
                .par_iter()
                .map(|t| self.classify_dimension(t))
                .collect()
        })
    }

    pub fn stats(&self) -> GatewayStats {
        GatewayStats {
            attempts: self.attempts.load(Ordering::Relaxed),
            failures: self.failures.load(Ordering::Relaxed),
            cache_hits: self.cache_hits.load(Ordering::Relaxed),
        }
    }
}

/// Map a raw capability response onto a vocabulary label.
pub fn validate_response(raw: &str, vocabulary: &Vocabulary) -> Result<String, ClassificationError> {
    let normalized = normalize_response(raw).ok_or_else(|| ClassificationError::Unparsable {
        raw: raw.to_string(),
    })?;
    vocabulary
        .resolve(&normalized)
        .map(str::to_string)
        .ok_or_else(|| ClassificationError::OutOfVocabulary {
            raw: raw.to_string(),
            vocabulary: vocabulary.name.clone(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab() -> Vocabulary {
        Vocabulary::new("dimension")
            .with_entry("honesty", "truthfulness and candor")
            .with_entry("voice-presence", "how I speak and show up")
    }

    #[test]
    fn accepts_normalized_label() {
        assert_eq!(validate_response(" \"Honesty\". ", &vocab()).unwrap(), "honesty");
    }

    #[test]
    fn accepts_gloss() {
        assert_eq!(
            validate_response("Truthfulness and candor", &vocab()).unwrap(),
            "honesty"
        );
    }

    #[test]
    fn rejects_out_of_vocabulary_with_raw_response() {
        let err = validate_response("kindness", &vocab()).unwrap_err();
        assert_eq!(
            err,
            ClassificationError::OutOfVocabulary {
                raw: "kindness".into(),
                vocabulary: "dimension".into(),
            }
        );
    }

    #[test]
    fn rejects_empty_response() {
        assert!(matches!(
            validate_response(" `` ", &vocab()),
            Err(ClassificationError::Unparsable { .. })
        ));
    }
}
