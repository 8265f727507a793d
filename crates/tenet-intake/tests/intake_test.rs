//! Integration tests for the ingest pipeline.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use proptest::prelude::*;
use tenet_classification::ClassificationGateway;
use tenet_core::config::{ClassificationConfig, IntakeConfig};
use tenet_core::errors::{ClassificationError, TenetError, TenetResult};
use tenet_core::models::{Dimension, SignalCandidate};
use tenet_core::traits::IEmbeddingProvider;
use tenet_intake::{select_candidates, IntakePipeline};
use test_fixtures::{candidate, HashedTermEmbedder, ScriptedClassifier};

fn pipeline(classifier: ScriptedClassifier) -> IntakePipeline {
    let gateway =
        ClassificationGateway::new(Arc::new(classifier), &ClassificationConfig::default()).unwrap();
    IntakePipeline::new(
        Arc::new(gateway),
        Arc::new(HashedTermEmbedder::new(32)),
        IntakeConfig::default(),
    )
}

#[test]
fn creates_signals_with_monotonic_order() {
    let p = pipeline(ScriptedClassifier::new().default_for("dimension", "honesty"));
    let cs = vec![
        candidate("I tell the truth", "diary/a.md", "diary", 0.9, 0),
        candidate("Candor over comfort", "notes/b.md", "notes", 0.8, 1),
        candidate("maybe", "notes/b.md", "notes", 0.2, 2),
    ];

    let report = p.ingest(&cs, 10).unwrap();
    assert_eq!(report.signals.len(), 2);
    assert_eq!(report.signals[0].creation_order, 10);
    assert_eq!(report.signals[1].creation_order, 11);
    assert_eq!(report.next_order, 12);
    assert_eq!(report.dropped_below_threshold, 1);
    assert!(report
        .signals
        .iter()
        .all(|s| s.dimension == Some(Dimension::Honesty) && s.embedding.len() == 32));
}

#[test]
fn classification_failure_drops_only_that_candidate() {
    let p = pipeline(
        ScriptedClassifier::new()
            .default_for("dimension", "honesty")
            .respond("dimension", "ambiguous fragment", "kindness"),
    );
    let cs = vec![
        candidate("I tell the truth", "diary/a.md", "diary", 0.9, 0),
        candidate("ambiguous fragment", "diary/a.md", "diary", 0.9, 1),
        candidate("Candor over comfort", "diary/a.md", "diary", 0.9, 2),
    ];

    let report = p.ingest(&cs, 0).unwrap();
    assert_eq!(report.signals.len(), 2);
    assert_eq!(report.rejections.len(), 1);
    assert_eq!(report.rejections[0].extraction_index, 1);
    assert!(matches!(
        report.rejections[0].error,
        ClassificationError::OutOfVocabulary { .. }
    ));
}

#[test]
fn unavailable_classifier_rejects_everything_without_consuming_order() {
    let p = pipeline(ScriptedClassifier::new().fail_for(
        "dimension",
        ClassificationError::Unavailable {
            reason: "offline".into(),
        },
    ));
    let cs = vec![
        candidate("I tell the truth", "diary/a.md", "diary", 0.9, 0),
        candidate("Candor over comfort", "notes/b.md", "notes", 0.8, 1),
    ];

    let report = p.ingest(&cs, 7).unwrap();
    assert!(report.signals.is_empty());
    assert_eq!(report.rejections.len(), 2);
    assert_eq!(report.next_order, 7);
    assert!(report.rejections.iter().all(|r| r.error.is_retryable()));
}

#[test]
fn reserving_ingest_advances_the_shared_counter_up_front() {
    let p = pipeline(
        ScriptedClassifier::new()
            .default_for("dimension", "honesty")
            .respond("dimension", "ambiguous fragment", "kindness"),
    );
    let counter = AtomicU64::new(5);
    let cs = vec![
        candidate("I tell the truth", "diary/a.md", "diary", 0.9, 0),
        candidate("ambiguous fragment", "diary/a.md", "diary", 0.9, 1),
        candidate("Candor over comfort", "notes/b.md", "notes", 0.8, 2),
        candidate("maybe", "notes/b.md", "notes", 0.2, 3),
    ];

    let report = p.ingest_reserving(&cs, &counter).unwrap();
    let orders: Vec<u64> = report.signals.iter().map(|s| s.creation_order).collect();
    assert_eq!(orders, vec![5, 6]);
    // Three candidates were selected, so three indices were reserved.
    assert_eq!(counter.load(Ordering::SeqCst), 8);
}

#[test]
fn reingesting_yields_identical_ids() {
    let p = pipeline(ScriptedClassifier::new().default_for("dimension", "honesty"));
    let cs = vec![candidate("I tell the truth", "diary/a.md", "diary", 0.9, 0)];
    let a = p.ingest(&cs, 0).unwrap();
    let b = p.ingest(&cs, 0).unwrap();
    assert_eq!(a.signals[0].id, b.signals[0].id);
}

struct BrokenEmbedder;

impl IEmbeddingProvider for BrokenEmbedder {
    fn embed(&self, _text: &str) -> TenetResult<Vec<f32>> {
        Err(TenetError::EmbeddingError {
            reason: "offline".into(),
        })
    }
    fn dimensions(&self) -> usize {
        8
    }
    fn name(&self) -> &str {
        "broken"
    }
}

#[test]
fn embedding_failure_aborts_ingest() {
    let gateway = ClassificationGateway::new(
        Arc::new(ScriptedClassifier::new().default_for("dimension", "honesty")),
        &ClassificationConfig::default(),
    )
    .unwrap();
    let p = IntakePipeline::new(Arc::new(gateway), Arc::new(BrokenEmbedder), IntakeConfig::default());
    let cs = vec![candidate("I tell the truth", "diary/a.md", "diary", 0.9, 0)];
    assert!(matches!(
        p.ingest(&cs, 0),
        Err(TenetError::EmbeddingError { .. })
    ));
}

fn arb_candidates() -> impl Strategy<Value = Vec<SignalCandidate>> {
    prop::collection::vec((0usize..3, 0.0f64..1.0), 0..40).prop_map(|items| {
        items
            .into_iter()
            .enumerate()
            .map(|(i, (file, conf))| {
                candidate(&format!("fragment {i}"), &format!("f{file}.md"), "memory", conf, i as u64)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn filter_respects_cap_and_threshold(cs in arb_candidates(), cap in 1usize..6) {
        let config = IntakeConfig { confidence_threshold: 0.5, per_source_cap: cap };
        let sel = select_candidates(&cs, &config);

        let mut per_file = std::collections::HashMap::new();
        for c in &sel.kept {
            prop_assert!(c.confidence.value() >= 0.5);
            *per_file.entry(c.source.file_path.clone()).or_insert(0usize) += 1;
        }
        prop_assert!(per_file.values().all(|&n| n <= cap));
        prop_assert!(sel.kept.windows(2).all(|w| w[0].extraction_index < w[1].extraction_index));
        prop_assert_eq!(sel.kept.len() + sel.below_threshold + sel.blank + sel.over_cap, cs.len());
    }

    #[test]
    fn filter_is_deterministic(cs in arb_candidates()) {
        let config = IntakeConfig { confidence_threshold: 0.5, per_source_cap: 2 };
        let a: Vec<u64> = select_candidates(&cs, &config).kept.iter().map(|c| c.extraction_index).collect();
        let b: Vec<u64> = select_candidates(&cs, &config).kept.iter().map(|c| c.extraction_index).collect();
        prop_assert_eq!(a, b);
    }
}
