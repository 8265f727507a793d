//! [`ObservabilityEngine`]: owns the metrics registry and emits snapshots.

use chrono::{DateTime, Utc};
use tenet_core::errors::{TenetError, TenetResult};

use crate::metrics::MetricsCollector;

/// Central observability engine.
#[derive(Debug)]
pub struct ObservabilityEngine {
    pub metrics: MetricsCollector,
    started_at: DateTime<Utc>,
}

impl ObservabilityEngine {
    pub fn new() -> Self {
        Self {
            metrics: MetricsCollector::new(),
            started_at: Utc::now(),
        }
    }

    /// Reset all metrics (for testing or periodic rotation).
    pub fn reset_metrics(&mut self) {
        self.metrics.reset();
    }

    /// Serialize current metrics to JSON.
    pub fn metrics_snapshot(&self) -> TenetResult<serde_json::Value> {
        let metrics_json =
            serde_json::to_value(&self.metrics).map_err(TenetError::SerializationError)?;
        Ok(serde_json::json!({
            "metrics": metrics_json,
            "started_at": self.started_at.to_rfc3339(),
            "avg_compression_ratio": self.metrics.convergence.avg_compression_ratio(),
        }))
    }
}

impl Default for ObservabilityEngine {
    fn default() -> Self {
        Self::new()
    }
}
