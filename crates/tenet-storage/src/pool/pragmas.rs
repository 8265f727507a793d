//! PRAGMA configuration applied to every SQLite connection.

use std::time::Duration;

use rusqlite::Connection;

use tenet_core::errors::TenetResult;

use crate::to_storage_err;

/// WAL journal, NORMAL sync, foreign keys on, and the given busy timeout.
pub fn apply_pragmas(conn: &Connection, busy_timeout_ms: u32) -> TenetResult<()> {
    conn.execute_batch(
        "
        PRAGMA journal_mode = WAL;
        PRAGMA synchronous = NORMAL;
        PRAGMA foreign_keys = ON;
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    conn.busy_timeout(Duration::from_millis(u64::from(busy_timeout_ms)))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Verify that WAL mode is active on a connection.
pub fn verify_wal_mode(conn: &Connection) -> TenetResult<bool> {
    let mode: String = conn
        .pragma_query_value(None, "journal_mode", |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(mode.eq_ignore_ascii_case("wal"))
}
