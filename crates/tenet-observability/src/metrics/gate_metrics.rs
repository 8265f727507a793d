//! Greenfield gate outcomes per policy.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tenet_core::models::GreenfieldState;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateCounts {
    pub valid: u64,
    pub invalid: u64,
    pub would_reject: u64,
}

/// Gate decisions keyed by policy label.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GateMetrics {
    pub by_policy: BTreeMap<String, GateCounts>,
}

impl GateMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, policy: GreenfieldState, valid: bool, would_reject: bool) {
        let counts = self.by_policy.entry(policy.to_string()).or_default();
        if valid {
            counts.valid += 1;
        } else {
            counts.invalid += 1;
        }
        if would_reject {
            counts.would_reject += 1;
        }
    }

    pub fn counts(&self, policy: GreenfieldState) -> GateCounts {
        self.by_policy
            .get(policy.as_str())
            .copied()
            .unwrap_or_default()
    }
}
