//! Input validation. Runs over the whole input before anything is mutated.

use tenet_core::errors::{TenetError, TenetResult};
use tenet_core::models::{PrincipleStore, Signal};

/// Verify every signal carries a dimension and a usable embedding of the
/// expected length.
///
/// The expected length is the store's, else `configured` when non-zero,
/// else the first signal's. Returns that length, or `None` for empty input
/// against an empty store.
pub fn check_preconditions(
    signals: &[Signal],
    store: &PrincipleStore,
    configured: usize,
) -> TenetResult<Option<usize>> {
    let expected = store
        .embedding_dimensions()
        .or((configured > 0).then_some(configured))
        .or_else(|| signals.first().map(|s| s.embedding.len()));

    for signal in signals {
        let fail = |reason: String| TenetError::PreconditionViolation {
            signal_id: signal.id.clone(),
            source_path: signal.source.file_path.clone(),
            reason,
        };

        if signal.dimension.is_none() {
            return Err(fail("dimension is unset".into()));
        }
        if signal.embedding.is_empty() {
            return Err(fail("embedding is empty".into()));
        }
        if let Some(i) = signal.embedding.iter().position(|x| !x.is_finite()) {
            return Err(fail(format!("embedding component {i} is not finite")));
        }
        if signal.embedding.iter().all(|x| *x == 0.0) {
            return Err(fail("embedding has zero magnitude".into()));
        }
        if let Some(len) = expected {
            if signal.embedding.len() != len {
                return Err(fail(format!(
                    "embedding has {} components, expected {len}",
                    signal.embedding.len()
                )));
            }
        }
    }
    Ok(expected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tenet_core::models::{Confidence, Dimension, SignalSource, SignalType};

    fn signal(embedding: Vec<f32>) -> Signal {
        Signal {
            id: "sig-1".into(),
            text: "t".into(),
            source: SignalSource::new("diary/a.md", "diary", 0),
            dimension: Some(Dimension::Honesty),
            signal_type: SignalType::Belief,
            embedding,
            confidence: Confidence::new(0.9),
            creation_order: 0,
        }
    }

    #[test]
    fn rejects_malformed_embeddings() {
        let store = PrincipleStore::new();
        for bad in [vec![], vec![0.0, 0.0], vec![f32::NAN, 1.0], vec![f32::INFINITY, 0.0]] {
            let err = check_preconditions(&[signal(bad)], &store, 0).unwrap_err();
            assert!(matches!(err, TenetError::PreconditionViolation { .. }));
        }
    }

    #[test]
    fn rejects_unclassified_signal() {
        let mut s = signal(vec![1.0, 0.0]);
        s.dimension = None;
        let err = check_preconditions(&[s], &PrincipleStore::new(), 0).unwrap_err();
        assert!(err.to_string().contains("dimension is unset"));
    }

    #[test]
    fn rejects_length_mismatch_against_first_signal() {
        let a = signal(vec![1.0, 0.0]);
        let mut b = signal(vec![1.0, 0.0, 0.0]);
        b.id = "sig-2".into();
        let err = check_preconditions(&[a, b], &PrincipleStore::new(), 0).unwrap_err();
        assert!(err.to_string().contains("sig-2"));
        assert!(err.to_string().contains("expected 2"));
    }

    #[test]
    fn configured_length_applies_to_empty_store() {
        let err = check_preconditions(&[signal(vec![1.0, 0.0])], &PrincipleStore::new(), 384)
            .unwrap_err();
        assert!(err.to_string().contains("expected 384"));
    }
}
