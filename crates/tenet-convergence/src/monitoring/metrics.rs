use serde::Serialize;
use tenet_core::models::PrincipleStore;
use tenet_observability::metrics::ConvergenceSample;

use crate::promotion::PromotionFailure;

/// Shape of a store after a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct StoreMetrics {
    pub principles: usize,
    pub signals: usize,
    pub axioms: usize,
    /// Referenced signals per principle.
    pub compression_ratio: f64,
    pub average_reinforcement: f64,
    /// Share of principles that own an axiom.
    pub promoted_ratio: f64,
}

impl StoreMetrics {
    pub fn compute(store: &PrincipleStore) -> Self {
        let principles = store.principles.len();
        let referenced: usize = store.principles.iter().map(|p| p.reinforcement_count).sum();
        let (compression_ratio, average_reinforcement, promoted_ratio) = if principles == 0 {
            (0.0, 0.0, 0.0)
        } else {
            let n = principles as f64;
            (
                store.signals.len() as f64 / n,
                referenced as f64 / n,
                store.promoted_count() as f64 / n,
            )
        };
        Self {
            principles,
            signals: store.signals.len(),
            axioms: store.axioms.len(),
            compression_ratio,
            average_reinforcement,
            promoted_ratio,
        }
    }
}

/// What one convergence run did.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConvergenceReport {
    /// Correlates log lines of one run.
    pub run_id: String,
    pub signals_in: usize,
    /// Signals actually folded (input minus skipped).
    pub processed: usize,
    /// Ids already in the store or repeated within the input.
    pub skipped: Vec<String>,
    pub principles_created: usize,
    pub signals_reinforced: usize,
    /// Ids of axioms created by this run.
    pub axioms_promoted: Vec<String>,
    pub promotion_failures: Vec<PromotionFailure>,
    pub metrics: StoreMetrics,
}

impl ConvergenceReport {
    /// Summary for the metrics collector.
    pub fn to_sample(&self) -> ConvergenceSample {
        ConvergenceSample {
            signals: self.processed,
            principles_created: self.principles_created,
            signals_reinforced: self.signals_reinforced,
            axioms_promoted: self.axioms_promoted.len(),
            promotion_failures: self.promotion_failures.len(),
            compression_ratio: self.metrics.compression_ratio,
        }
    }
}
