use serde::{Deserialize, Serialize};

use super::defaults;

/// Axiom promotion configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PromotionConfig {
    /// Minimum reinforcement count for promotion.
    pub axiom_threshold: usize,
    /// Minimum number of distinct source categories. Never below 2.
    pub min_cross_category: usize,
    /// Request a decorative glyph alongside the anchor.
    pub glyphs_enabled: bool,
}

impl Default for PromotionConfig {
    fn default() -> Self {
        Self {
            axiom_threshold: defaults::DEFAULT_AXIOM_THRESHOLD,
            min_cross_category: defaults::DEFAULT_MIN_CROSS_CATEGORY,
            glyphs_enabled: defaults::DEFAULT_GLYPHS_ENABLED,
        }
    }
}
