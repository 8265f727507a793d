use tenet_core::models::{CheckOutcome, GateNote, GreenfieldState, ValidationResult};
use tenet_observability::tracing_setup::events;

/// Apply `policy` to a check outcome.
///
/// Pure apart from logging: the same inputs always produce the same result.
pub fn evaluate(outcome: &CheckOutcome, policy: GreenfieldState) -> ValidationResult {
    let _span = tenet_observability::validation_span!(policy).entered();
    let enforced = policy.rejects();

    let notes: Vec<GateNote> = outcome
        .failures
        .iter()
        .map(|f| {
            if enforced {
                events::validation_rejected(f.reason.code(), &f.detail);
            } else {
                events::validation_would_reject(policy.as_str(), f.reason.code(), &f.detail);
            }
            GateNote {
                reason: f.reason.code().to_string(),
                detail: f.detail.clone(),
                enforced,
            }
        })
        .collect();

    let primary = outcome.primary().map(|f| f.reason.code().to_string());
    let (valid, reason, would_reject) = match (primary, enforced) {
        (None, _) => (true, None, None),
        (Some(code), true) => (false, Some(code), None),
        (Some(code), false) => (true, None, Some(code)),
    };

    ValidationResult {
        valid,
        policy,
        reason,
        would_reject,
        notes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tenet_core::models::RejectReason;

    fn no_axioms() -> CheckOutcome {
        let mut outcome = CheckOutcome::passed();
        outcome.fail(RejectReason::NoAxiomsGenerated, "store holds 0 axioms");
        outcome
    }

    #[test]
    fn bootstrap_downgrades_to_would_reject() {
        let result = evaluate(&no_axioms(), GreenfieldState::Bootstrap);
        assert!(result.valid);
        assert_eq!(result.would_reject.as_deref(), Some("no-axioms-generated"));
        assert_eq!(result.reason, None);
        assert!(!result.notes[0].enforced);
    }

    #[test]
    fn learn_accepts_like_bootstrap() {
        let bootstrap = evaluate(&no_axioms(), GreenfieldState::Bootstrap);
        let learn = evaluate(&no_axioms(), GreenfieldState::Learn);
        assert_eq!(learn.valid, bootstrap.valid);
        assert_eq!(learn.would_reject, bootstrap.would_reject);
        assert_eq!(learn.policy, GreenfieldState::Learn);
    }

    #[test]
    fn enforce_rejects_with_reason() {
        let result = evaluate(&no_axioms(), GreenfieldState::Enforce);
        assert!(!result.valid);
        assert_eq!(result.reason.as_deref(), Some("no-axioms-generated"));
        assert_eq!(result.would_reject, None);
        assert!(result.notes[0].enforced);
    }

    #[test]
    fn passing_checks_are_valid_under_every_policy() {
        for policy in GreenfieldState::ALL {
            let result = evaluate(&CheckOutcome::passed(), policy);
            assert!(result.valid);
            assert!(result.notes.is_empty());
            assert_eq!(result.would_reject, None);
        }
    }
}
