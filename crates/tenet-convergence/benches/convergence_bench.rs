//! Criterion benchmarks for tenet-convergence.
//!
//! - Fold of 1K signals across all dimensions, sequential vs parallel
//! - Incremental run of 100 signals against a 1K-signal store
//! - Best-match scan over 500 principles

use std::sync::Arc;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use tenet_classification::{ClassificationGateway, KeywordClassifier};
use tenet_convergence::algorithms::similarity::best_match;
use tenet_convergence::{AxiomPromoter, ConvergenceEngine};
use tenet_core::config::{ClassificationConfig, ConvergenceConfig, PromotionConfig};
use tenet_core::models::{Dimension, GreenfieldState, Principle, PrincipleStore, Signal};
use test_fixtures::signal;

const DIMS: usize = 32;

/// Deterministic pseudo-random unit-ish vector.
fn embedding(seed: u64) -> Vec<f32> {
    let mut x = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    (0..DIMS)
        .map(|_| {
            x ^= x << 13;
            x ^= x >> 7;
            x ^= x << 17;
            (x % 1000) as f32 / 1000.0 + 0.001
        })
        .collect()
}

fn make_signals(n: u64, offset: u64) -> Vec<Signal> {
    (offset..offset + n)
        .map(|i| {
            let dim = Dimension::ALL[(i % Dimension::ALL.len() as u64) as usize];
            signal(
                &format!("bench signal {i}"),
                dim,
                &format!("cat-{}", i % 5),
                embedding(i),
                i,
            )
        })
        .collect()
}

fn make_engine(parallel: bool) -> ConvergenceEngine {
    let gateway = ClassificationGateway::new(
        Arc::new(KeywordClassifier),
        &ClassificationConfig::default(),
    )
    .unwrap_or_else(|e| panic!("gateway: {e}"));
    let config = ConvergenceConfig {
        match_threshold: 0.97,
        parallel_dimensions: parallel,
        ..Default::default()
    };
    ConvergenceEngine::new(
        config,
        AxiomPromoter::new(Arc::new(gateway), PromotionConfig::default()),
    )
}

fn bench_fold(c: &mut Criterion) {
    let signals = make_signals(1_000, 0);
    let mut group = c.benchmark_group("converge_1k");
    for parallel in [false, true] {
        let engine = make_engine(parallel);
        group.bench_with_input(
            BenchmarkId::from_parameter(if parallel { "parallel" } else { "sequential" }),
            &signals,
            |b, signals| {
                b.iter(|| {
                    engine
                        .converge(signals, &PrincipleStore::new(), GreenfieldState::Bootstrap)
                        .unwrap_or_else(|e| panic!("converge: {e}"))
                });
            },
        );
    }
    group.finish();
}

fn bench_incremental(c: &mut Criterion) {
    let engine = make_engine(true);
    let base = engine
        .converge(&make_signals(1_000, 0), &PrincipleStore::new(), GreenfieldState::Bootstrap)
        .unwrap_or_else(|e| panic!("converge: {e}"))
        .store;
    let batch = make_signals(100, 1_000);

    c.bench_function("converge_100_into_1k_store", |b| {
        b.iter(|| {
            engine
                .converge(&batch, &base, GreenfieldState::Bootstrap)
                .unwrap_or_else(|e| panic!("converge: {e}"))
        });
    });
}

fn bench_best_match(c: &mut Criterion) {
    let principles: Vec<Principle> = make_signals(500, 0)
        .iter()
        .map(|s| Principle::seed(s, Dimension::Honesty))
        .collect();
    let probe = embedding(9_999);

    c.bench_function("best_match_500_principles", |b| {
        b.iter(|| best_match(&principles, &probe, 0.8));
    });
}

criterion_group!(benches, bench_fold, bench_incremental, bench_best_match);
criterion_main!(benches);
