//! Convergence quality checks. Policy-agnostic; the gate decides what a
//! failure means.

use tenet_core::models::{CheckOutcome, PrincipleStore, RejectReason};

pub fn run_checks(signals_in: usize, store: &PrincipleStore) -> CheckOutcome {
    let mut outcome = CheckOutcome::passed();
    if signals_in > 0 && store.principles.is_empty() {
        outcome.fail(
            RejectReason::NoPrinciplesGenerated,
            format!("{signals_in} signals produced no principles"),
        );
    }
    if store.axioms.is_empty() {
        outcome.fail(
            RejectReason::NoAxiomsGenerated,
            format!(
                "{} principles, none promoted (max reinforcement {})",
                store.principles.len(),
                store
                    .principles
                    .iter()
                    .map(|p| p.reinforcement_count)
                    .max()
                    .unwrap_or(0)
            ),
        );
    }
    outcome
}
