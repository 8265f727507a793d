//! Record every would-reject note for later threshold calibration.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tenet_core::models::{GreenfieldState, ValidationResult};

/// One recorded gate note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub recorded_at: DateTime<Utc>,
    pub policy: GreenfieldState,
    pub reason: String,
    pub detail: String,
    pub enforced: bool,
}

/// Accumulates gate notes across runs. Performs no threshold learning.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RejectionLedger {
    entries: Vec<LedgerEntry>,
    counts: BTreeMap<String, u64>,
}

impl RejectionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record every note of `result`. Returns the number of entries added.
    pub fn record(&mut self, result: &ValidationResult) -> usize {
        let now = Utc::now();
        for note in &result.notes {
            *self.counts.entry(note.reason.clone()).or_default() += 1;
            self.entries.push(LedgerEntry {
                recorded_at: now,
                policy: result.policy,
                reason: note.reason.clone(),
                detail: note.detail.clone(),
                enforced: note.enforced,
            });
        }
        result.notes.len()
    }

    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    /// Notes recorded under a permissive policy.
    pub fn would_rejects(&self) -> impl Iterator<Item = &LedgerEntry> {
        self.entries.iter().filter(|e| !e.enforced)
    }

    pub fn count(&self, reason: &str) -> u64 {
        self.counts.get(reason).copied().unwrap_or(0)
    }

    pub fn counts(&self) -> &BTreeMap<String, u64> {
        &self.counts
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.counts.clear();
    }
}
