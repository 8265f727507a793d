use serde::{Deserialize, Serialize};

use super::defaults;

/// Snapshot storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path to the SQLite database holding snapshots.
    pub db_path: String,
    /// Snapshots kept per label when pruning.
    pub snapshot_retention: usize,
    /// SQLite busy timeout in milliseconds.
    pub busy_timeout_ms: u32,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            db_path: defaults::DEFAULT_DB_FILENAME.to_string(),
            snapshot_retention: defaults::DEFAULT_SNAPSHOT_RETENTION,
            busy_timeout_ms: defaults::DEFAULT_BUSY_TIMEOUT_MS,
        }
    }
}
