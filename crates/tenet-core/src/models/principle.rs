use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::constants::{ID_HASH_CHARS, PRINCIPLE_ID_PREFIX};

use super::{Dimension, PromotionStatus, Signal};

/// A cluster of reinforcing signals sharing a semantic center.
///
/// Invariants (checked by `PrincipleStore::check_invariants`):
/// `reinforcement_count == signal_ids.len()` and
/// `cross_category_strength == source_categories.len()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Principle {
    pub id: String,
    pub dimension: Dimension,
    /// Running mean of member embeddings.
    pub centroid: Vec<f32>,
    /// Member signal ids in insertion order.
    pub signal_ids: Vec<String>,
    pub reinforcement_count: usize,
    /// Distinct source categories among members.
    pub source_categories: BTreeSet<String>,
    pub cross_category_strength: usize,
    pub promotion: PromotionStatus,
    /// Creation order of the seed signal. Earlier principles win similarity ties.
    pub creation_order: u64,
    /// Dimensions reported by merged counterparts that disagreed with `dimension`.
    #[serde(default)]
    pub conflicting_dimensions: BTreeSet<Dimension>,
}

impl Principle {
    /// Deterministic principle id derived from the seed signal.
    pub fn derive_id(seed_signal_id: &str) -> String {
        let hash = blake3::hash(seed_signal_id.as_bytes()).to_hex();
        format!("{PRINCIPLE_ID_PREFIX}{}", &hash[..ID_HASH_CHARS])
    }

    /// Start a new principle with `signal` as its sole member.
    pub fn seed(signal: &Signal, dimension: Dimension) -> Self {
        let mut source_categories = BTreeSet::new();
        source_categories.insert(signal.category().to_string());
        Self {
            id: Self::derive_id(&signal.id),
            dimension,
            centroid: signal.embedding.clone(),
            signal_ids: vec![signal.id.clone()],
            reinforcement_count: 1,
            cross_category_strength: 1,
            source_categories,
            promotion: PromotionStatus::NotPromoted,
            creation_order: signal.creation_order,
            conflicting_dimensions: BTreeSet::new(),
        }
    }

    /// Append a signal and move the centroid by the incremental mean.
    ///
    /// Callers must not pass a signal that is already a member.
    pub fn absorb(&mut self, signal: &Signal) {
        self.signal_ids.push(signal.id.clone());
        let n = self.signal_ids.len() as f64;
        for (c, x) in self.centroid.iter_mut().zip(&signal.embedding) {
            let current = *c as f64;
            *c = (current + (*x as f64 - current) / n) as f32;
        }
        self.source_categories.insert(signal.category().to_string());
        self.refresh_counts();
    }

    /// Replace membership and recompute centroid as the plain mean over `members`.
    pub fn rebuild(&mut self, members: &[&Signal]) {
        self.signal_ids = members.iter().map(|s| s.id.clone()).collect();
        self.source_categories = members
            .iter()
            .map(|s| s.category().to_string())
            .collect();
        if let Some(first) = members.first() {
            let mut sums = vec![0.0f64; first.embedding.len()];
            for signal in members {
                for (acc, x) in sums.iter_mut().zip(&signal.embedding) {
                    *acc += *x as f64;
                }
            }
            let n = members.len() as f64;
            self.centroid = sums.into_iter().map(|v| (v / n) as f32).collect();
        }
        self.refresh_counts();
    }

    pub fn contains(&self, signal_id: &str) -> bool {
        self.signal_ids.iter().any(|id| id == signal_id)
    }

    pub fn is_promoted(&self) -> bool {
        self.promotion.is_promoted()
    }

    fn refresh_counts(&mut self) {
        self.reinforcement_count = self.signal_ids.len();
        self.cross_category_strength = self.source_categories.len();
    }
}
