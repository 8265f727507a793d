//! Layered configuration: per-subsystem sections with serde defaults, loaded from TOML.

pub mod defaults;

mod classification_config;
mod convergence_config;
mod greenfield_config;
mod intake_config;
mod merge_config;
mod observability_config;
mod promotion_config;
mod storage_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{TenetError, TenetResult};

pub use classification_config::ClassificationConfig;
pub use convergence_config::ConvergenceConfig;
pub use greenfield_config::{GreenfieldConfig, GREENFIELD_ENV_VAR};
pub use intake_config::IntakeConfig;
pub use merge_config::MergeConfig;
pub use observability_config::ObservabilityConfig;
pub use promotion_config::PromotionConfig;
pub use storage_config::StorageConfig;

/// Top-level configuration. Every section is optional in TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TenetConfig {
    pub intake: IntakeConfig,
    pub classification: ClassificationConfig,
    pub convergence: ConvergenceConfig,
    pub promotion: PromotionConfig,
    pub merge: MergeConfig,
    pub greenfield: GreenfieldConfig,
    pub storage: StorageConfig,
    pub observability: ObservabilityConfig,
}

impl TenetConfig {
    /// Parse a TOML string. Missing keys fall back to defaults.
    pub fn from_toml(toml_str: &str) -> TenetResult<Self> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| TenetError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn from_file(path: &Path) -> TenetResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            TenetError::ConfigError(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }

    /// Check value ranges that serde cannot express.
    pub fn validate(&self) -> TenetResult<()> {
        check_unit("intake.confidence_threshold", self.intake.confidence_threshold)?;
        check_unit("convergence.match_threshold", self.convergence.match_threshold)?;
        check_unit("merge.threshold", self.merge.threshold)?;

        if self.intake.per_source_cap == 0 {
            return Err(TenetError::ConfigError(
                "intake.per_source_cap must be at least 1".into(),
            ));
        }
        if self.classification.max_concurrency == 0 {
            return Err(TenetError::ConfigError(
                "classification.max_concurrency must be at least 1".into(),
            ));
        }
        if self.promotion.axiom_threshold == 0 {
            return Err(TenetError::ConfigError(
                "promotion.axiom_threshold must be at least 1".into(),
            ));
        }
        if self.promotion.min_cross_category < defaults::DEFAULT_MIN_CROSS_CATEGORY {
            return Err(TenetError::ConfigError(format!(
                "promotion.min_cross_category must be at least {}, got {}",
                defaults::DEFAULT_MIN_CROSS_CATEGORY,
                self.promotion.min_cross_category
            )));
        }
        Ok(())
    }
}

fn check_unit(key: &str, value: f64) -> TenetResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(TenetError::ConfigError(format!(
            "{key} must be within [0.0, 1.0], got {value}"
        )))
    }
}
