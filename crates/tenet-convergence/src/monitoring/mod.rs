//! Convergence run reporting and store-level quality metrics.

pub mod metrics;

pub use metrics::{ConvergenceReport, StoreMetrics};
