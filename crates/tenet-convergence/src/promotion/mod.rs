//! Axiom promotion.
//!
//! A principle is eligible when its reinforcement count reaches the axiom
//! threshold and its signals come from at least two source categories.
//! Canonical forms come from the classification gateway; a classification
//! failure defers promotion to the next qualifying mutation.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use tenet_classification::vocabulary::{anchor_vocabulary, glyph_vocabulary};
use tenet_classification::ClassificationGateway;
use tenet_core::config::PromotionConfig;
use tenet_core::constants::MIN_CROSS_CATEGORY_STRENGTH;
use tenet_core::errors::ClassificationError;
use tenet_core::models::{
    Axiom, CanonicalForm, Principle, PrincipleStore, PromotionStatus, Signal, Vocabulary,
};
use tenet_observability::tracing_setup::events;
use tracing::warn;

/// An eligible principle that could not be promoted this cycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PromotionFailure {
    pub principle_id: String,
    #[serde(serialize_with = "display")]
    pub error: ClassificationError,
}

fn display<S: serde::Serializer>(e: &ClassificationError, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(e)
}

/// Outcome of offering one principle to the promoter.
#[derive(Debug)]
pub enum PromotionAttempt {
    NotEligible,
    Promoted(Axiom),
    Deferred(PromotionFailure),
}

/// Result of [`AxiomPromoter::sweep`].
#[derive(Debug, Default)]
pub struct SweepReport {
    pub promoted: Vec<String>,
    pub failures: Vec<PromotionFailure>,
}

pub struct AxiomPromoter {
    gateway: Arc<ClassificationGateway>,
    config: PromotionConfig,
    anchors: Vocabulary,
    glyphs: Vocabulary,
}

impl AxiomPromoter {
    pub fn new(gateway: Arc<ClassificationGateway>, config: PromotionConfig) -> Self {
        Self {
            gateway,
            config,
            anchors: anchor_vocabulary(),
            glyphs: glyph_vocabulary(),
        }
    }

    pub fn config(&self) -> &PromotionConfig {
        &self.config
    }

    /// Un-promoted, reinforced enough, and cross-category.
    pub fn is_eligible(&self, principle: &Principle) -> bool {
        let min_cross = self.config.min_cross_category.max(MIN_CROSS_CATEGORY_STRENGTH);
        !principle.is_promoted()
            && principle.reinforcement_count >= self.config.axiom_threshold
            && principle.cross_category_strength >= min_cross
    }

    /// Build the axiom for `principle` from its member signals.
    pub fn promote(&self, principle: &Principle, members: &[&Signal]) -> Result<Axiom, ClassificationError> {
        let _span = tenet_observability::promotion_span!(principle.id).entered();
        let representative = representative(members).ok_or_else(|| {
            ClassificationError::Unavailable {
                reason: format!("principle {} has no resolvable members", principle.id),
            }
        })?;

        let anchor = self.gateway.classify(&representative.text, &self.anchors)?;
        let glyph = if self.config.glyphs_enabled {
            Some(self.gateway.classify(&representative.text, &self.glyphs)?)
        } else {
            None
        };

        Ok(Axiom {
            id: Axiom::derive_id(&principle.id),
            principle_id: principle.id.clone(),
            dimension: principle.dimension,
            canonical: CanonicalForm {
                notation: CanonicalForm::notation_for(
                    principle.dimension,
                    &anchor,
                    principle.reinforcement_count,
                ),
                anchor,
                glyph,
            },
            representative_text: representative.text.clone(),
            promotion_reinforcement: principle.reinforcement_count,
            promotion_cross_category: principle.cross_category_strength,
            promoted_at: Utc::now(),
        })
    }

    /// Promote `principle` in place if eligible.
    pub fn try_promote(
        &self,
        principle: &mut Principle,
        index: &HashMap<&str, &Signal>,
    ) -> PromotionAttempt {
        if !self.is_eligible(principle) {
            return PromotionAttempt::NotEligible;
        }
        let members: Vec<&Signal> = principle
            .signal_ids
            .iter()
            .filter_map(|id| index.get(id.as_str()).copied())
            .collect();

        match self.promote(principle, &members) {
            Ok(axiom) => {
                principle.promotion = PromotionStatus::Promoted(axiom.reference());
                events::axiom_promoted(&axiom.id, &principle.id, &axiom.canonical.notation);
                PromotionAttempt::Promoted(axiom)
            }
            Err(error) => {
                events::promotion_deferred(&principle.id, &error.to_string());
                PromotionAttempt::Deferred(PromotionFailure {
                    principle_id: principle.id.clone(),
                    error,
                })
            }
        }
    }

    /// Offer every eligible principle of `store` for promotion.
    pub fn sweep(&self, store: &mut PrincipleStore) -> SweepReport {
        let mut report = SweepReport::default();
        let PrincipleStore {
            signals,
            principles,
            axioms,
        } = store;
        let index: HashMap<&str, &Signal> = signals.iter().map(|(k, v)| (k.as_str(), v)).collect();

        for principle in principles.iter_mut() {
            match self.try_promote(principle, &index) {
                PromotionAttempt::Promoted(axiom) => {
                    report.promoted.push(axiom.id.clone());
                    if axioms.insert(axiom.id.clone(), axiom).is_some() {
                        warn!(principle_id = %principle.id, "axiom id already present, replaced");
                    }
                }
                PromotionAttempt::Deferred(failure) => report.failures.push(failure),
                PromotionAttempt::NotEligible => {}
            }
        }
        report
    }
}

/// Highest-confidence member, earliest creation order on ties.
pub fn representative<'a>(members: &[&'a Signal]) -> Option<&'a Signal> {
    members.iter().copied().min_by(|a, b| {
        b.confidence
            .total_cmp(&a.confidence)
            .then(a.creation_order.cmp(&b.creation_order))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tenet_core::models::{Confidence, Dimension, SignalSource, SignalType};

    fn member(text: &str, confidence: f64, order: u64) -> Signal {
        Signal {
            id: format!("sig-{text}"),
            text: text.into(),
            source: SignalSource::new("c/a.md", "c", 0),
            dimension: Some(Dimension::Honesty),
            signal_type: SignalType::Value,
            embedding: vec![1.0],
            confidence: Confidence::new(confidence),
            creation_order: order,
        }
    }

    #[test]
    fn representative_prefers_confidence_then_order() {
        let a = member("a", 0.7, 0);
        let b = member("b", 0.9, 2);
        let c = member("c", 0.9, 1);
        assert_eq!(representative(&[&a, &b, &c]).unwrap().text, "c");
        assert!(representative(&[]).is_none());
    }
}
