//! # tenet-observability
//!
//! Tracing setup, span macros, structured events and metrics collectors.
//! Other crates emit through [`tracing_setup::events`]; the runtime owns an
//! [`ObservabilityEngine`] and feeds it run summaries.

pub mod engine;
pub mod metrics;
pub mod tracing_setup;

pub use engine::ObservabilityEngine;
pub use metrics::MetricsCollector;
