//! Central metrics registry.
//!
//! [`MetricsCollector`] owns all domain-specific metric collectors.

pub mod classification_metrics;
pub mod convergence_metrics;
pub mod gate_metrics;
pub mod merge_metrics;

pub use classification_metrics::ClassificationMetrics;
pub use convergence_metrics::{ConvergenceMetricsCollector, ConvergenceSample};
pub use gate_metrics::GateMetrics;
pub use merge_metrics::MergeMetricsCollector;

/// Central metrics registry that owns all domain-specific collectors.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct MetricsCollector {
    pub convergence: ConvergenceMetricsCollector,
    pub merge: MergeMetricsCollector,
    pub gate: GateMetrics,
    pub classification: ClassificationMetrics,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all metrics (useful for testing or periodic rotation).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
