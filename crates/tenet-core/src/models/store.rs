use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::{TenetError, TenetResult};

use super::{Axiom, Dimension, Principle, PromotionStatus, Signal};

/// Signals, the principles that reference them, and the axioms promoted from
/// those principles. The unit that convergence and merge operate on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PrincipleStore {
    /// Every signal known to the store, keyed by id.
    pub signals: BTreeMap<String, Signal>,
    /// Principles ordered by `(creation_order, id)`.
    pub principles: Vec<Principle>,
    /// Axioms keyed by id. Entries are never removed.
    pub axioms: BTreeMap<String, Axiom>,
}

impl PrincipleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.signals.is_empty() && self.principles.is_empty() && self.axioms.is_empty()
    }

    pub fn signal(&self, id: &str) -> Option<&Signal> {
        self.signals.get(id)
    }

    pub fn principle(&self, id: &str) -> Option<&Principle> {
        self.principles.iter().find(|p| p.id == id)
    }

    pub fn axiom(&self, id: &str) -> Option<&Axiom> {
        self.axioms.get(id)
    }

    /// Principles of one dimension, in creation order.
    pub fn principles_in(&self, dimension: Dimension) -> impl Iterator<Item = &Principle> {
        self.principles
            .iter()
            .filter(move |p| p.dimension == dimension)
    }

    /// Id of the principle that references `signal_id`, if any.
    pub fn owner_of(&self, signal_id: &str) -> Option<&str> {
        self.principles
            .iter()
            .find(|p| p.contains(signal_id))
            .map(|p| p.id.as_str())
    }

    /// Embedding length established by existing principles or signals.
    pub fn embedding_dimensions(&self) -> Option<usize> {
        self.principles
            .first()
            .map(|p| p.centroid.len())
            .or_else(|| self.signals.values().next().map(|s| s.embedding.len()))
    }

    pub fn promoted_count(&self) -> usize {
        self.principles.iter().filter(|p| p.is_promoted()).count()
    }

    /// Resolve a principle's members against the signal table.
    pub fn members(&self, principle: &Principle) -> TenetResult<Vec<&Signal>> {
        principle
            .signal_ids
            .iter()
            .map(|id| {
                self.signals
                    .get(id)
                    .ok_or_else(|| TenetError::InvariantViolation {
                        principle_id: principle.id.clone(),
                        details: format!("references unknown signal {id}"),
                    })
            })
            .collect()
    }

    /// Restore the canonical principle order.
    pub fn sort_principles(&mut self) {
        self.principles
            .sort_by(|a, b| a.creation_order.cmp(&b.creation_order).then_with(|| a.id.cmp(&b.id)));
    }

    /// Verify every structural invariant of the store.
    pub fn check_invariants(&self) -> TenetResult<()> {
        let mut owners: HashMap<&str, &str> = HashMap::new();
        let mut seen_ids: BTreeSet<&str> = BTreeSet::new();

        for principle in &self.principles {
            let violation = |details: String| TenetError::InvariantViolation {
                principle_id: principle.id.clone(),
                details,
            };

            if !seen_ids.insert(principle.id.as_str()) {
                return Err(violation("duplicate principle id".into()));
            }

            let distinct: BTreeSet<&str> =
                principle.signal_ids.iter().map(String::as_str).collect();
            if distinct.len() != principle.signal_ids.len() {
                return Err(violation("duplicate signal reference".into()));
            }
            if principle.reinforcement_count != distinct.len() {
                return Err(violation(format!(
                    "reinforcement count {} != {} referenced signals",
                    principle.reinforcement_count,
                    distinct.len()
                )));
            }

            let members = self.members(principle)?;
            let categories: BTreeSet<&str> = members.iter().map(|s| s.category()).collect();
            let recorded: BTreeSet<&str> =
                principle.source_categories.iter().map(String::as_str).collect();
            if categories != recorded || principle.cross_category_strength != categories.len() {
                return Err(violation(format!(
                    "cross-category strength {} != {} distinct categories",
                    principle.cross_category_strength,
                    categories.len()
                )));
            }

            for id in &principle.signal_ids {
                if let Some(other) = owners.insert(id.as_str(), principle.id.as_str()) {
                    return Err(violation(format!(
                        "signal {id} also referenced by principle {other}"
                    )));
                }
            }

            if let PromotionStatus::Promoted(axiom_ref) = &principle.promotion {
                match self.axioms.get(&axiom_ref.axiom_id) {
                    Some(axiom) if axiom.principle_id == principle.id => {}
                    Some(axiom) => {
                        return Err(violation(format!(
                            "axiom {} is owned by {}",
                            axiom.id, axiom.principle_id
                        )))
                    }
                    None => {
                        return Err(violation(format!(
                            "promoted to unknown axiom {}",
                            axiom_ref.axiom_id
                        )))
                    }
                }
            }
        }
        Ok(())
    }
}
