//! Structured log events for key system operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// A signal seeded a new principle.
pub fn principle_created(principle_id: &str, signal_id: &str, dimension: &str) {
    tracing::debug!(
        event = "principle_created",
        principle_id = %principle_id,
        signal_id = %signal_id,
        dimension = %dimension,
        "principle created"
    );
}

/// A signal joined an existing principle.
pub fn signal_reinforced(principle_id: &str, signal_id: &str, similarity: f64, count: usize) {
    tracing::debug!(
        event = "signal_reinforced",
        principle_id = %principle_id,
        signal_id = %signal_id,
        similarity = similarity,
        reinforcement = count,
        "signal reinforced principle"
    );
}

/// A principle was promoted to an axiom.
pub fn axiom_promoted(axiom_id: &str, principle_id: &str, notation: &str) {
    tracing::info!(
        event = "axiom_promoted",
        axiom_id = %axiom_id,
        principle_id = %principle_id,
        notation = %notation,
        "axiom promoted"
    );
}

/// An eligible principle could not be promoted this cycle.
pub fn promotion_deferred(principle_id: &str, error: &str) {
    tracing::warn!(
        event = "promotion_deferred",
        principle_id = %principle_id,
        error = %error,
        "promotion deferred"
    );
}

/// A merge recorded a conflict.
pub fn merge_conflict(kind: &str, principle_id: &str, detail: &str) {
    tracing::warn!(
        event = "merge_conflict",
        kind = %kind,
        principle_id = %principle_id,
        detail = %detail,
        "merge conflict"
    );
}

/// A merge finished.
pub fn merge_completed(matched: usize, inserted: usize, conflicts: usize) {
    tracing::info!(
        event = "merge_completed",
        matched = matched,
        inserted = inserted,
        conflicts = conflicts,
        "merge completed"
    );
}

/// A failed check was downgraded by a permissive policy.
pub fn validation_would_reject(policy: &str, reason: &str, detail: &str) {
    tracing::warn!(
        event = "validation_would_reject",
        policy = %policy,
        reason = %reason,
        detail = %detail,
        "validation would reject"
    );
}

/// A failed check rejected the result.
pub fn validation_rejected(reason: &str, detail: &str) {
    tracing::error!(
        event = "validation_rejected",
        reason = %reason,
        detail = %detail,
        "validation rejected"
    );
}

/// A convergence run finished.
pub fn convergence_completed(signals: usize, created: usize, reinforced: usize, promoted: usize) {
    tracing::info!(
        event = "convergence_completed",
        signals = signals,
        created = created,
        reinforced = reinforced,
        promoted = promoted,
        "convergence completed"
    );
}
