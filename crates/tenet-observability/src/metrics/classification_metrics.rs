use serde::{Deserialize, Serialize};

/// Classification gateway counters, refreshed from gateway snapshots.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ClassificationMetrics {
    pub attempts: u64,
    pub failures: u64,
    pub cache_hits: u64,
}

impl ClassificationMetrics {
    /// Replace counters with the latest cumulative snapshot.
    pub fn update(&mut self, attempts: u64, failures: u64, cache_hits: u64) {
        self.attempts = attempts;
        self.failures = failures;
        self.cache_hits = cache_hits;
    }

    pub fn failure_rate(&self) -> f64 {
        if self.attempts == 0 {
            return 0.0;
        }
        self.failures as f64 / self.attempts as f64
    }

    pub fn cache_hit_rate(&self) -> f64 {
        let lookups = self.attempts + self.cache_hits;
        if lookups == 0 {
            return 0.0;
        }
        self.cache_hits as f64 / lookups as f64
    }
}
