//! Baseline + incoming store merge.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;
use tenet_convergence::algorithms::similarity::cosine_similarity;
use tenet_core::config::MergeConfig;
use tenet_core::errors::{TenetError, TenetResult};
use tenet_core::models::{
    Axiom, Principle, PrincipleStore, PromotionResolution, PromotionStatus, Signal,
};
use tenet_observability::tracing_setup::events;
use tracing::debug;

use crate::conflict::MergeConflict;

/// Counters for one merge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MergeStats {
    /// Incoming principles matched to a baseline principle.
    pub matched: usize,
    /// Incoming principles added as new principles.
    pub inserted: usize,
    /// Unmatched incoming principles whose signals were all owned elsewhere.
    pub folded: usize,
    /// Signals newly attached to an existing principle.
    pub signals_added: usize,
}

#[derive(Debug, Clone)]
pub struct MergeOutcome {
    pub store: PrincipleStore,
    pub conflicts: Vec<MergeConflict>,
    pub stats: MergeStats,
}

/// Merges a newly synthesized store into a baseline.
///
/// Each incoming principle, in its store's order, is matched first by
/// identifier, then to the principle already owning its axiom, and otherwise by
/// best centroid similarity at or above the
/// threshold, against baseline principles only. A match unions the signal
/// sets; no match inserts the incoming principle under its own id.
/// `merge(s, s)` reproduces `s`.
pub struct StoreMerger {
    config: MergeConfig,
}

impl StoreMerger {
    pub fn new(config: MergeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MergeConfig {
        &self.config
    }

    pub fn merge(
        &self,
        baseline: &PrincipleStore,
        incoming: &PrincipleStore,
    ) -> TenetResult<MergeOutcome> {
        let _span = tenet_observability::merge_span!(
            baseline.principles.len(),
            incoming.principles.len()
        )
        .entered();

        let mut merged = baseline.clone();
        for (id, signal) in &incoming.signals {
            merged.signals.entry(id.clone()).or_insert_with(|| signal.clone());
        }
        for (id, axiom) in &incoming.axioms {
            merged.axioms.entry(id.clone()).or_insert_with(|| axiom.clone());
        }

        let candidates = merged.principles.len();
        let mut owners: HashMap<String, usize> = HashMap::new();
        for (i, p) in merged.principles.iter().enumerate() {
            for id in &p.signal_ids {
                owners.insert(id.clone(), i);
            }
        }

        let mut conflicts = Vec::new();
        let mut stats = MergeStats::default();

        for n in &incoming.principles {
            if let Some(i) = self.find_match(&merged.principles[..candidates], &merged.axioms, n) {
                stats.matched += 1;
                stats.signals_added +=
                    absorb_into(&mut merged, &mut owners, i, n, &mut conflicts)?;
                continue;
            }

            let (owned, free): (Vec<&String>, Vec<&String>) = n
                .signal_ids
                .iter()
                .partition(|id| owners.contains_key(id.as_str()));

            if free.is_empty() && !owned.is_empty() {
                let i = majority_owner(&owned, &owners);
                debug!(incoming = %n.id, into = %merged.principles[i].id, "folding fully owned principle");
                stats.folded += 1;
                absorb_into(&mut merged, &mut owners, i, n, &mut conflicts)?;
                continue;
            }

            let mut inserted = n.clone();
            if !owned.is_empty() {
                conflicts.push(MergeConflict::PrincipleOverlap {
                    principle_id: n.id.clone(),
                    incoming_id: n.id.clone(),
                    signal_ids: owned.iter().map(|id| (*id).clone()).collect(),
                });
                let members = resolve(&merged.signals, &n.id, free.iter().copied())?;
                inserted.rebuild(&members);
            }
            let at = merged.principles.len();
            for id in &inserted.signal_ids {
                owners.insert(id.clone(), at);
            }
            merged.principles.push(inserted);
            stats.inserted += 1;
        }

        merged.sort_principles();
        merged.check_invariants()?;

        for conflict in &conflicts {
            events::merge_conflict(conflict.kind(), conflict.principle_id(), &conflict.detail());
        }
        events::merge_completed(stats.matched, stats.inserted, conflicts.len());

        Ok(MergeOutcome {
            store: merged,
            conflicts,
            stats,
        })
    }

    /// Identity first, then the axiom owner, then best similarity among
    /// compatible principles. `candidates` are in creation order, so the
    /// earliest wins ties.
    ///
    /// An axiom re-homed by an earlier merge names the principle that
    /// absorbed `n`; that principle stays `n`'s match however far `n` has
    /// moved since.
    fn find_match(
        &self,
        candidates: &[Principle],
        axioms: &BTreeMap<String, Axiom>,
        n: &Principle,
    ) -> Option<usize> {
        if let Some(i) = candidates.iter().position(|b| b.id == n.id) {
            return Some(i);
        }
        let axiom_owner = n
            .promotion
            .axiom()
            .and_then(|r| axioms.get(&r.axiom_id))
            .map(|a| a.principle_id.as_str());
        if let Some(owner) = axiom_owner {
            if let Some(i) = candidates.iter().position(|b| b.id == owner) {
                return Some(i);
            }
        }
        let mut best: Option<(usize, f64)> = None;
        for (i, b) in candidates.iter().enumerate() {
            if !self.config.cross_dimension && b.dimension != n.dimension {
                continue;
            }
            let sim = cosine_similarity(&b.centroid, &n.centroid);
            if sim >= self.config.threshold && best.map_or(true, |(_, s)| sim > s) {
                best = Some((i, sim));
            }
        }
        best.map(|(i, _)| i)
    }
}

/// Merge `n` into `merged.principles[target]`. Returns the number of signals
/// newly attached.
fn absorb_into(
    merged: &mut PrincipleStore,
    owners: &mut HashMap<String, usize>,
    target: usize,
    n: &Principle,
    conflicts: &mut Vec<MergeConflict>,
) -> TenetResult<usize> {
    let PrincipleStore {
        signals,
        principles,
        axioms,
    } = merged;
    let target_id = principles[target].id.clone();

    if principles[target].dimension != n.dimension {
        conflicts.push(MergeConflict::DimensionMismatch {
            principle_id: target_id.clone(),
            baseline: principles[target].dimension,
            incoming: n.dimension,
        });
        principles[target].conflicting_dimensions.insert(n.dimension);
    }

    let mut shared = Vec::new();
    let mut elsewhere: BTreeMap<usize, Vec<String>> = BTreeMap::new();
    let mut added = Vec::new();
    for id in &n.signal_ids {
        match owners.get(id) {
            Some(&o) if o == target => {
                if n.id != target_id {
                    shared.push(id.clone());
                }
            }
            Some(&o) => elsewhere.entry(o).or_default().push(id.clone()),
            None => added.push(id.clone()),
        }
    }
    if !shared.is_empty() {
        conflicts.push(MergeConflict::PrincipleOverlap {
            principle_id: target_id.clone(),
            incoming_id: n.id.clone(),
            signal_ids: shared,
        });
    }
    for (o, ids) in elsewhere {
        conflicts.push(MergeConflict::PrincipleOverlap {
            principle_id: principles[o].id.clone(),
            incoming_id: n.id.clone(),
            signal_ids: ids,
        });
    }

    let added_count = added.len();
    if !added.is_empty() {
        let ids: Vec<&String> = principles[target].signal_ids.iter().chain(&added).collect();
        let members = resolve(signals, &target_id, ids.into_iter())?;
        principles[target].rebuild(&members);
        for id in added {
            owners.insert(id, target);
        }
    }

    let resolved = PromotionStatus::merge(&principles[target].promotion, &n.promotion);
    match &resolved.resolution {
        PromotionResolution::IncomingPromoted => {
            if let Some(r) = n.promotion.axiom() {
                rehome(axioms, &r.axiom_id, &n.id, &target_id);
            }
        }
        PromotionResolution::BothPromoted { aliased, .. } => {
            rehome(axioms, &aliased.axiom_id, &n.id, &target_id);
        }
        PromotionResolution::Agreed | PromotionResolution::BaselinePromoted => {}
    }
    if resolved.resolution.is_conflict() {
        conflicts.push(MergeConflict::PromotionStatus {
            principle_id: target_id,
            resolution: resolved.resolution,
        });
    }
    principles[target].promotion = resolved.status;
    Ok(added_count)
}

/// Move an axiom from the incoming principle to the principle that absorbed it.
fn rehome(axioms: &mut BTreeMap<String, Axiom>, axiom_id: &str, from: &str, to: &str) {
    if let Some(axiom) = axioms.get_mut(axiom_id) {
        if axiom.principle_id == from {
            axiom.principle_id = to.to_string();
        }
    }
}

/// Principle owning most of `ids`; lowest index on ties.
fn majority_owner(ids: &[&String], owners: &HashMap<String, usize>) -> usize {
    let mut counts: BTreeMap<usize, usize> = BTreeMap::new();
    for id in ids {
        if let Some(&o) = owners.get(id.as_str()) {
            *counts.entry(o).or_default() += 1;
        }
    }
    let mut best = (0, 0);
    for (o, c) in counts {
        if c > best.1 {
            best = (o, c);
        }
    }
    best.0
}

fn resolve<'a, 'b>(
    signals: &'a BTreeMap<String, Signal>,
    principle_id: &str,
    ids: impl Iterator<Item = &'b String>,
) -> TenetResult<Vec<&'a Signal>> {
    ids.map(|id| {
        signals.get(id).ok_or_else(|| TenetError::InvariantViolation {
            principle_id: principle_id.to_string(),
            details: format!("references unknown signal {id}"),
        })
    })
    .collect()
}
