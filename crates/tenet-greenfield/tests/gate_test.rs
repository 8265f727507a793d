use proptest::prelude::*;
use tenet_core::models::{CheckOutcome, GreenfieldState, RejectReason};
use tenet_greenfield::{evaluate, RejectionLedger};

fn failing(reasons: &[RejectReason]) -> CheckOutcome {
    let mut outcome = CheckOutcome::passed();
    for r in reasons {
        outcome.fail(*r, format!("{r} detail"));
    }
    outcome
}

#[test]
fn first_failure_determines_reason() {
    let outcome = failing(&[RejectReason::NoPrinciplesGenerated, RejectReason::NoAxiomsGenerated]);
    let result = evaluate(&outcome, GreenfieldState::Enforce);
    assert_eq!(result.reason.as_deref(), Some("no-principles-generated"));
    assert_eq!(result.notes.len(), 2);
}

#[test]
fn enforce_result_converts_to_error() {
    let result = evaluate(&failing(&[RejectReason::NoAxiomsGenerated]), GreenfieldState::Enforce);
    let err = result.into_result().unwrap_err();
    assert!(err.to_string().contains("no-axioms-generated"));
}

#[test]
fn ledger_accumulates_learn_telemetry() {
    let mut ledger = RejectionLedger::new();
    let outcome = failing(&[RejectReason::NoAxiomsGenerated]);
    ledger.record(&evaluate(&outcome, GreenfieldState::Learn));
    ledger.record(&evaluate(&outcome, GreenfieldState::Learn));
    ledger.record(&evaluate(&CheckOutcome::passed(), GreenfieldState::Learn));

    assert_eq!(ledger.len(), 2);
    assert_eq!(ledger.count("no-axioms-generated"), 2);
    assert_eq!(ledger.would_rejects().count(), 2);
    assert!(ledger.entries().iter().all(|e| e.policy == GreenfieldState::Learn));
}

#[test]
fn ledger_marks_enforced_entries() {
    let mut ledger = RejectionLedger::new();
    ledger.record(&evaluate(&failing(&[RejectReason::NoAxiomsGenerated]), GreenfieldState::Enforce));
    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger.would_rejects().count(), 0);
}

fn arb_reasons() -> impl Strategy<Value = Vec<RejectReason>> {
    prop::collection::vec(
        prop_oneof![
            Just(RejectReason::NoAxiomsGenerated),
            Just(RejectReason::NoPrinciplesGenerated)
        ],
        0..3,
    )
}

proptest! {
    #[test]
    fn only_enforce_invalidates(reasons in arb_reasons()) {
        let outcome = failing(&reasons);
        for policy in GreenfieldState::ALL {
            let result = evaluate(&outcome, policy);
            let should_reject = policy == GreenfieldState::Enforce && !reasons.is_empty();
            prop_assert_eq!(result.valid, !should_reject);
            prop_assert_eq!(result.reason.is_some(), should_reject);
            prop_assert_eq!(
                result.would_reject.is_some(),
                policy != GreenfieldState::Enforce && !reasons.is_empty()
            );
        }
    }
}
