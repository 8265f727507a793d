use serde::{Deserialize, Serialize};

use crate::models::GreenfieldState;

/// Environment variable that overrides the configured policy.
pub const GREENFIELD_ENV_VAR: &str = "TENET_GREENFIELD";

/// Greenfield gate configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GreenfieldConfig {
    /// Policy applied when the caller does not pass one explicitly.
    pub policy: GreenfieldState,
}

impl GreenfieldConfig {
    /// The configured policy, overridden by `TENET_GREENFIELD` when set to a
    /// recognised value.
    pub fn resolve_policy(&self) -> GreenfieldState {
        std::env::var(GREENFIELD_ENV_VAR)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(self.policy)
    }
}
