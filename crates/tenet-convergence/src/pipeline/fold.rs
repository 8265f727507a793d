//! Sequential nearest-centroid fold for a single dimension.

use std::collections::HashMap;

use tenet_core::models::{Axiom, Dimension, Principle, Signal};
use tenet_observability::tracing_setup::events;

use crate::algorithms::similarity::best_match;
use crate::promotion::{AxiomPromoter, PromotionAttempt, PromotionFailure};

/// Result of folding one dimension.
#[derive(Debug, Default)]
pub struct FoldOutput {
    /// All principles of the dimension, in creation order.
    pub principles: Vec<Principle>,
    pub axioms: Vec<Axiom>,
    pub created: usize,
    pub reinforced: usize,
    pub promotion_failures: Vec<PromotionFailure>,
}

/// Fold `signals` (already in creation order, all of `dimension`) into
/// `principles` one at a time.
///
/// Each signal joins the most similar principle at or above `threshold`, or
/// seeds a new one. After every mutation the touched principle is offered to
/// `promoter`; a deferred promotion is retried on its next mutation.
pub fn fold_dimension(
    dimension: Dimension,
    mut principles: Vec<Principle>,
    signals: &[&Signal],
    index: &HashMap<&str, &Signal>,
    threshold: f64,
    promoter: Option<&AxiomPromoter>,
) -> FoldOutput {
    let _span = tenet_observability::fold_span!(dimension, signals.len()).entered();
    principles.sort_by(|a, b| a.creation_order.cmp(&b.creation_order).then_with(|| a.id.cmp(&b.id)));

    let mut out = FoldOutput::default();
    for signal in signals {
        let touched = match best_match(&principles, &signal.embedding, threshold) {
            Some((i, similarity)) => {
                principles[i].absorb(signal);
                out.reinforced += 1;
                events::signal_reinforced(
                    &principles[i].id,
                    &signal.id,
                    similarity,
                    principles[i].reinforcement_count,
                );
                i
            }
            None => {
                let seeded = Principle::seed(signal, dimension);
                events::principle_created(&seeded.id, &signal.id, dimension.label());
                let at = principles.partition_point(|p| {
                    (p.creation_order, p.id.as_str()) <= (seeded.creation_order, seeded.id.as_str())
                });
                principles.insert(at, seeded);
                out.created += 1;
                at
            }
        };

        if let Some(promoter) = promoter {
            match promoter.try_promote(&mut principles[touched], index) {
                PromotionAttempt::Promoted(axiom) => out.axioms.push(axiom),
                PromotionAttempt::Deferred(failure) => out.promotion_failures.push(failure),
                PromotionAttempt::NotEligible => {}
            }
        }
    }
    out.principles = principles;
    out
}
