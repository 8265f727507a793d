use serde::{Deserialize, Serialize};

use super::defaults;

/// Signal intake configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IntakeConfig {
    /// Candidates below this confidence are dropped.
    pub confidence_threshold: f64,
    /// Maximum signals kept per source file.
    pub per_source_cap: usize,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: defaults::DEFAULT_CONFIDENCE_THRESHOLD,
            per_source_cap: defaults::DEFAULT_PER_SOURCE_CAP,
        }
    }
}
