use crate::errors::TenetResult;
use crate::models::{PrincipleStore, SnapshotMeta};

/// Persistence boundary: snapshot and restore a whole store as an opaque blob.
pub trait ISnapshotStore: Send + Sync {
    /// Persist `store` under `label`, returning the new snapshot id.
    fn save(&self, label: &str, store: &PrincipleStore) -> TenetResult<i64>;

    /// Load a snapshot by id.
    fn load(&self, id: i64) -> TenetResult<PrincipleStore>;

    /// Most recent snapshot for `label`, if any.
    fn load_latest(&self, label: &str) -> TenetResult<Option<PrincipleStore>>;

    /// Snapshot metadata for `label`, newest first.
    fn list(&self, label: &str) -> TenetResult<Vec<SnapshotMeta>>;

    /// Delete all but the newest `keep` snapshots of `label`. Returns the
    /// number of rows removed.
    fn prune(&self, label: &str, keep: usize) -> TenetResult<usize>;
}
