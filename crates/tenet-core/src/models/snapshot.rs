use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Metadata row kept next to a persisted store blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SnapshotMeta {
    pub id: i64,
    pub label: String,
    pub created_at: DateTime<Utc>,
    /// Hex BLAKE3 checksum of the compressed body.
    pub checksum: String,
    pub signal_count: usize,
    pub principle_count: usize,
    pub axiom_count: usize,
    pub byte_len: usize,
}
