use serde::{Deserialize, Serialize};

use super::defaults;

/// Classification gateway configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassificationConfig {
    /// Upper bound on concurrently running classification calls in a batch.
    pub max_concurrency: usize,
    /// Entries kept in the result cache. 0 disables caching.
    pub cache_capacity: u64,
}

impl Default for ClassificationConfig {
    fn default() -> Self {
        Self {
            max_concurrency: defaults::DEFAULT_CLASSIFICATION_CONCURRENCY,
            cache_capacity: defaults::DEFAULT_CLASSIFICATION_CACHE_CAPACITY,
        }
    }
}
