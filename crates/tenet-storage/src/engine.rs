//! SnapshotStorage: owns the connection, runs migrations, implements
//! `ISnapshotStore`.

use std::path::Path;

use chrono::Utc;
use tracing::{debug, info};

use tenet_core::config::StorageConfig;
use tenet_core::errors::{StorageError, TenetResult};
use tenet_core::models::{PrincipleStore, SnapshotMeta};
use tenet_core::traits::ISnapshotStore;

use crate::codec;
use crate::migrations;
use crate::pool::WriteConnection;
use crate::queries::snapshot_ops::{self, NewSnapshot};

pub struct SnapshotStorage {
    conn: WriteConnection,
}

impl SnapshotStorage {
    /// Open a file-backed store with the default busy timeout.
    pub fn open(path: &Path) -> TenetResult<Self> {
        Self::open_with_config(path, &StorageConfig::default())
    }

    pub fn open_with_config(path: &Path, config: &StorageConfig) -> TenetResult<Self> {
        let storage = Self {
            conn: WriteConnection::open(path, config.busy_timeout_ms)?,
        };
        storage.initialize()?;
        Ok(storage)
    }

    /// Open an in-memory store (for testing).
    pub fn open_in_memory() -> TenetResult<Self> {
        let storage = Self {
            conn: WriteConnection::open_in_memory()?,
        };
        storage.initialize()?;
        Ok(storage)
    }

    fn initialize(&self) -> TenetResult<()> {
        self.conn.with_conn(migrations::run_migrations)
    }

    pub fn connection(&self) -> &WriteConnection {
        &self.conn
    }
}

impl ISnapshotStore for SnapshotStorage {
    fn save(&self, label: &str, store: &PrincipleStore) -> TenetResult<i64> {
        let encoded = codec::encode(store)?;
        let row = NewSnapshot {
            label,
            created_at: Utc::now(),
            checksum: &encoded.checksum,
            signal_count: store.signals.len(),
            principle_count: store.principles.len(),
            axiom_count: store.axioms.len(),
            blob: &encoded.bytes,
        };
        let id = self.conn.with_conn(|conn| snapshot_ops::insert_snapshot(conn, &row))?;
        info!(snapshot_id = id, label, bytes = encoded.bytes.len(), "snapshot saved");
        Ok(id)
    }

    fn load(&self, id: i64) -> TenetResult<PrincipleStore> {
        let blob = self
            .conn
            .with_conn(|conn| snapshot_ops::get_blob(conn, id))?
            .ok_or_else(|| StorageError::SnapshotNotFound { id: id.to_string() })?;
        debug!(snapshot_id = id, bytes = blob.len(), "snapshot loaded");
        codec::decode(&blob)
    }

    fn load_latest(&self, label: &str) -> TenetResult<Option<PrincipleStore>> {
        match self.conn.with_conn(|conn| snapshot_ops::latest_id(conn, label))? {
            Some(id) => self.load(id).map(Some),
            None => Ok(None),
        }
    }

    fn list(&self, label: &str) -> TenetResult<Vec<SnapshotMeta>> {
        self.conn.with_conn(|conn| snapshot_ops::list_meta(conn, label))
    }

    fn prune(&self, label: &str, keep: usize) -> TenetResult<usize> {
        let removed = self.conn.with_conn(|conn| snapshot_ops::prune(conn, label, keep))?;
        if removed > 0 {
            info!(label, removed, keep, "pruned snapshots");
        }
        Ok(removed)
    }
}
