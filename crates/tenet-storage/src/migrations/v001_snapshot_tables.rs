//! v001: principle_snapshots.

pub const MIGRATION_SQL: &str = "
CREATE TABLE IF NOT EXISTS principle_snapshots (
    id              INTEGER PRIMARY KEY AUTOINCREMENT,
    label           TEXT NOT NULL,
    created_at      TEXT NOT NULL,
    checksum        TEXT NOT NULL,
    signal_count    INTEGER NOT NULL,
    principle_count INTEGER NOT NULL,
    axiom_count     INTEGER NOT NULL,
    byte_len        INTEGER NOT NULL,
    blob            BLOB NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_snapshots_label ON principle_snapshots(label, id);
";
