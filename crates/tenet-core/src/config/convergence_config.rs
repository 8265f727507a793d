use serde::{Deserialize, Serialize};

use super::defaults;

/// Convergence engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvergenceConfig {
    /// Minimum cosine similarity for a signal to join an existing principle.
    pub match_threshold: f64,
    /// Fold distinct dimensions on separate threads.
    pub parallel_dimensions: bool,
    /// Expected embedding length. 0 infers it from the store or first signal.
    pub embedding_dimensions: usize,
}

impl Default for ConvergenceConfig {
    fn default() -> Self {
        Self {
            match_threshold: defaults::DEFAULT_MATCH_THRESHOLD,
            parallel_dimensions: defaults::DEFAULT_PARALLEL_DIMENSIONS,
            embedding_dimensions: defaults::DEFAULT_EMBEDDING_DIMENSIONS,
        }
    }
}
