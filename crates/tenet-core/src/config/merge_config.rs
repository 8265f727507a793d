use serde::{Deserialize, Serialize};

use super::defaults;

/// Store merge configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeConfig {
    /// Minimum centroid similarity for two principles to be merged.
    pub threshold: f64,
    /// Allow matching principles of different dimensions.
    pub cross_dimension: bool,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            threshold: defaults::DEFAULT_MERGE_THRESHOLD,
            cross_dimension: defaults::DEFAULT_CROSS_DIMENSION_MERGE,
        }
    }
}
