use tenet_core::models::GreenfieldState;
use tenet_observability::metrics::ConvergenceSample;
use tenet_observability::tracing_setup::{self, spans::names};
use tenet_observability::ObservabilityEngine;

#[test]
fn tracing_init_is_idempotent() {
    let first = tracing_setup::init_tracing_with_filter("debug");
    let second = tracing_setup::init_tracing_with_filter("debug");
    // At most one install can succeed in a process.
    assert!(!(first && second));
    tracing_setup::events::principle_created("pr-1", "sig-1", "honesty");
}

#[test]
fn span_macros_use_exported_names() {
    let span = tenet_observability::convergence_span!(3, GreenfieldState::Bootstrap);
    let _guard = span.enter();
    assert_eq!(names::CONVERGENCE, "tenet.convergence");
    let _merge = tenet_observability::merge_span!(2, 1);
}

#[test]
fn convergence_metrics_aggregate() {
    let mut engine = ObservabilityEngine::new();
    engine.metrics.convergence.record(ConvergenceSample {
        signals: 6,
        principles_created: 2,
        signals_reinforced: 4,
        axioms_promoted: 1,
        promotion_failures: 1,
        compression_ratio: 3.0,
    });
    engine.metrics.convergence.record(ConvergenceSample {
        compression_ratio: 1.0,
        ..Default::default()
    });

    assert_eq!(engine.metrics.convergence.total_runs, 2);
    assert_eq!(engine.metrics.convergence.avg_compression_ratio(), 2.0);
    assert_eq!(engine.metrics.convergence.promotion_failure_rate(), 0.5);
}

#[test]
fn gate_metrics_by_policy() {
    let mut engine = ObservabilityEngine::new();
    engine.metrics.gate.record(GreenfieldState::Bootstrap, true, true);
    engine.metrics.gate.record(GreenfieldState::Enforce, false, false);

    let bootstrap = engine.metrics.gate.counts(GreenfieldState::Bootstrap);
    assert_eq!((bootstrap.valid, bootstrap.would_reject), (1, 1));
    assert_eq!(engine.metrics.gate.counts(GreenfieldState::Enforce).invalid, 1);
    assert_eq!(engine.metrics.gate.counts(GreenfieldState::Learn).valid, 0);
}

#[test]
fn snapshot_serializes_all_collectors() {
    let mut engine = ObservabilityEngine::new();
    engine.metrics.merge.record_run(2, 1);
    engine.metrics.merge.record_conflict("dimension_mismatch");
    engine.metrics.classification.update(10, 2, 5);

    let snapshot = engine.metrics_snapshot().unwrap();
    assert_eq!(snapshot["metrics"]["merge"]["matched"], 2);
    assert_eq!(snapshot["metrics"]["merge"]["conflicts"]["dimension_mismatch"], 1);
    assert_eq!(snapshot["metrics"]["classification"]["failures"], 2);
    assert_eq!(engine.metrics.merge.total_conflicts(), 1);
    assert_eq!(engine.metrics.classification.failure_rate(), 0.2);
    assert!((engine.metrics.classification.cache_hit_rate() - 1.0 / 3.0).abs() < 1e-9);

    engine.reset_metrics();
    assert_eq!(engine.metrics.merge.total_runs, 0);
}
