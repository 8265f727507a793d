use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Aggregated store merge metrics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MergeMetricsCollector {
    pub total_runs: u64,
    pub matched: u64,
    pub inserted: u64,
    /// Conflict counts keyed by conflict kind.
    pub conflicts: BTreeMap<String, u64>,
}

impl MergeMetricsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_run(&mut self, matched: usize, inserted: usize) {
        self.total_runs += 1;
        self.matched += matched as u64;
        self.inserted += inserted as u64;
    }

    pub fn record_conflict(&mut self, kind: &str) {
        *self.conflicts.entry(kind.to_string()).or_default() += 1;
    }

    pub fn total_conflicts(&self) -> u64 {
        self.conflicts.values().sum()
    }
}
