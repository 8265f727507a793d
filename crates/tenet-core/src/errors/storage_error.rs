/// Snapshot persistence errors.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("migration failed at version {version}: {reason}")]
    MigrationFailed { version: u32, reason: String },

    #[error("snapshot is corrupt: {details}")]
    CorruptSnapshot { details: String },

    #[error("snapshot not found: {id}")]
    SnapshotNotFound { id: String },
}
