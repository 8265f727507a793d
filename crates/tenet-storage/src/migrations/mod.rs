//! Schema migrations using PRAGMA user_version.

pub mod v001_snapshot_tables;

use rusqlite::Connection;
use tenet_core::errors::{StorageError, TenetResult};
use tracing::info;

fn failed(version: u32, e: rusqlite::Error) -> StorageError {
    StorageError::MigrationFailed {
        version,
        reason: e.to_string(),
    }
}

/// Run all pending migrations.
pub fn run_migrations(conn: &Connection) -> TenetResult<()> {
    let current = current_version(conn)?;
    let migrations: &[(&str, u32)] = &[(v001_snapshot_tables::MIGRATION_SQL, 1)];

    for (sql, version) in migrations {
        if current < *version {
            conn.execute_batch(sql).map_err(|e| failed(*version, e))?;
            conn.pragma_update(None, "user_version", version)
                .map_err(|e| failed(*version, e))?;
            info!(version = version, "applied migration");
        }
    }
    Ok(())
}

/// Current schema version.
pub fn current_version(conn: &Connection) -> TenetResult<u32> {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(|e| failed(0, e).into())
}
