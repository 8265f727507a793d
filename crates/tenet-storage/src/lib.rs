//! # tenet-storage
//!
//! Persists whole principle stores as opaque snapshot blobs in SQLite.
//! Each row carries the blob plus metadata (label, timestamp, checksum,
//! counts) so snapshots can be listed without decoding.

pub mod codec;
pub mod engine;
pub mod migrations;
pub mod pool;
pub mod queries;

pub use engine::SnapshotStorage;

use tenet_core::errors::{StorageError, TenetError};

/// Wrap a SQLite failure message as a Tenet error.
pub(crate) fn to_storage_err(message: String) -> TenetError {
    TenetError::StorageError(StorageError::SqliteError { message })
}
