//! Row-level operations on `principle_snapshots`.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};

use tenet_core::errors::{StorageError, TenetResult};
use tenet_core::models::SnapshotMeta;

use crate::to_storage_err;

/// Columns of a new snapshot row.
pub struct NewSnapshot<'a> {
    pub label: &'a str,
    pub created_at: DateTime<Utc>,
    pub checksum: &'a str,
    pub signal_count: usize,
    pub principle_count: usize,
    pub axiom_count: usize,
    pub blob: &'a [u8],
}

pub fn insert_snapshot(conn: &Connection, row: &NewSnapshot<'_>) -> TenetResult<i64> {
    conn.execute(
        "INSERT INTO principle_snapshots
            (label, created_at, checksum, signal_count, principle_count, axiom_count, byte_len, blob)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            row.label,
            row.created_at.to_rfc3339(),
            row.checksum,
            row.signal_count as i64,
            row.principle_count as i64,
            row.axiom_count as i64,
            row.blob.len() as i64,
            row.blob,
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(conn.last_insert_rowid())
}

pub fn get_blob(conn: &Connection, id: i64) -> TenetResult<Option<Vec<u8>>> {
    conn.query_row(
        "SELECT blob FROM principle_snapshots WHERE id = ?1",
        params![id],
        |row| row.get(0),
    )
    .optional()
    .map_err(|e| to_storage_err(e.to_string()))
}

/// Id of the newest snapshot for `label`.
pub fn latest_id(conn: &Connection, label: &str) -> TenetResult<Option<i64>> {
    conn.query_row(
        "SELECT id FROM principle_snapshots WHERE label = ?1 ORDER BY id DESC LIMIT 1",
        params![label],
        |row| row.get(0),
    )
    .optional()
    .map_err(|e| to_storage_err(e.to_string()))
}

/// Metadata for `label`, newest first.
pub fn list_meta(conn: &Connection, label: &str) -> TenetResult<Vec<SnapshotMeta>> {
    let mut stmt = conn
        .prepare(
            "SELECT id, label, created_at, checksum, signal_count, principle_count, axiom_count, byte_len
             FROM principle_snapshots WHERE label = ?1 ORDER BY id DESC",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![label], raw_meta)
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut out = Vec::new();
    for row in rows {
        let raw = row.map_err(|e| to_storage_err(e.to_string()))?;
        out.push(raw.into_meta()?);
    }
    Ok(out)
}

/// Delete all but the newest `keep` rows of `label`.
pub fn prune(conn: &Connection, label: &str, keep: usize) -> TenetResult<usize> {
    conn.execute(
        "DELETE FROM principle_snapshots
         WHERE label = ?1
           AND id NOT IN (
               SELECT id FROM principle_snapshots WHERE label = ?1 ORDER BY id DESC LIMIT ?2
           )",
        params![label, keep as i64],
    )
    .map_err(|e| to_storage_err(e.to_string()))
}

struct RawMeta {
    id: i64,
    label: String,
    created_at: String,
    checksum: String,
    signal_count: i64,
    principle_count: i64,
    axiom_count: i64,
    byte_len: i64,
}

fn raw_meta(row: &Row<'_>) -> rusqlite::Result<RawMeta> {
    Ok(RawMeta {
        id: row.get(0)?,
        label: row.get(1)?,
        created_at: row.get(2)?,
        checksum: row.get(3)?,
        signal_count: row.get(4)?,
        principle_count: row.get(5)?,
        axiom_count: row.get(6)?,
        byte_len: row.get(7)?,
    })
}

impl RawMeta {
    fn into_meta(self) -> TenetResult<SnapshotMeta> {
        let created_at = DateTime::parse_from_rfc3339(&self.created_at)
            .map_err(|e| StorageError::CorruptSnapshot {
                details: format!("snapshot {} has bad created_at: {e}", self.id),
            })?
            .with_timezone(&Utc);
        Ok(SnapshotMeta {
            id: self.id,
            label: self.label,
            created_at,
            checksum: self.checksum,
            signal_count: self.signal_count.max(0) as usize,
            principle_count: self.principle_count.max(0) as usize,
            axiom_count: self.axiom_count.max(0) as usize,
            byte_len: self.byte_len.max(0) as usize,
        })
    }
}
