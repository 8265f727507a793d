//! Single connection behind `std::sync::Mutex`. Serialized access.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;

use tenet_core::errors::TenetResult;

use super::pragmas::apply_pragmas;
use crate::to_storage_err;

pub struct WriteConnection {
    conn: Mutex<Connection>,
}

impl WriteConnection {
    pub fn open(path: &Path, busy_timeout_ms: u32) -> TenetResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn, busy_timeout_ms)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> TenetResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn, 0)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Acquire the lock and run `f` with the connection.
    pub fn with_conn<F, T>(&self, f: F) -> TenetResult<T>
    where
        F: FnOnce(&Connection) -> TenetResult<T>,
    {
        let guard = self
            .conn
            .lock()
            .map_err(|_| to_storage_err("connection mutex poisoned".to_string()))?;
        f(&guard)
    }
}
