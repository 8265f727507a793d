//! Convergence run metrics: volume, compression ratio, promotion rate.

use serde::{Deserialize, Serialize};

/// Summary of one convergence run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ConvergenceSample {
    pub signals: usize,
    pub principles_created: usize,
    pub signals_reinforced: usize,
    pub axioms_promoted: usize,
    pub promotion_failures: usize,
    /// Signals per principle across the resulting store.
    pub compression_ratio: f64,
}

/// Aggregated convergence metrics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConvergenceMetricsCollector {
    samples: Vec<ConvergenceSample>,
    pub total_runs: u64,
    pub total_signals: u64,
    pub total_axioms: u64,
    pub precondition_failures: u64,
}

impl ConvergenceMetricsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, sample: ConvergenceSample) {
        self.total_runs += 1;
        self.total_signals += sample.signals as u64;
        self.total_axioms += sample.axioms_promoted as u64;
        self.samples.push(sample);
    }

    pub fn record_precondition_failure(&mut self) {
        self.precondition_failures += 1;
    }

    pub fn avg_compression_ratio(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        self.samples.iter().map(|s| s.compression_ratio).sum::<f64>() / self.samples.len() as f64
    }

    /// Share of attempted promotions that failed.
    pub fn promotion_failure_rate(&self) -> f64 {
        let failed: usize = self.samples.iter().map(|s| s.promotion_failures).sum();
        let promoted: usize = self.samples.iter().map(|s| s.axioms_promoted).sum();
        if failed + promoted == 0 {
            return 0.0;
        }
        failed as f64 / (failed + promoted) as f64
    }

    pub fn last(&self) -> Option<&ConvergenceSample> {
        self.samples.last()
    }
}
