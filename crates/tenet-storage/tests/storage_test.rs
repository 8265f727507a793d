//! SnapshotStorage against in-memory and file-backed SQLite.

use tenet_core::errors::{StorageError, TenetError};
use tenet_core::models::{Dimension, Principle, PrincipleStore};
use tenet_core::traits::ISnapshotStore;
use tenet_storage::pool::pragmas::verify_wal_mode;
use tenet_storage::SnapshotStorage;
use test_fixtures::signal;

fn sample_store(n: u64) -> PrincipleStore {
    let mut store = PrincipleStore::new();
    for i in 0..n {
        let s = signal(&format!("s{i}"), Dimension::Honesty, "diary", vec![1.0, i as f32], i);
        store.principles.push(Principle::seed(&s, Dimension::Honesty));
        store.signals.insert(s.id.clone(), s);
    }
    store
}

#[test]
fn save_then_load_returns_the_same_store() {
    let storage = SnapshotStorage::open_in_memory().unwrap();
    let store = sample_store(3);

    let id = storage.save("main", &store).unwrap();
    assert_eq!(storage.load(id).unwrap(), store);
}

#[test]
fn latest_is_per_label() {
    let storage = SnapshotStorage::open_in_memory().unwrap();
    storage.save("main", &sample_store(1)).unwrap();
    storage.save("other", &sample_store(5)).unwrap();
    storage.save("main", &sample_store(2)).unwrap();

    let latest = storage.load_latest("main").unwrap().unwrap();
    assert_eq!(latest.principles.len(), 2);
    assert!(storage.load_latest("missing").unwrap().is_none());
}

#[test]
fn list_reports_metadata_newest_first() {
    let storage = SnapshotStorage::open_in_memory().unwrap();
    let first = storage.save("main", &sample_store(1)).unwrap();
    let second = storage.save("main", &sample_store(4)).unwrap();

    let metas = storage.list("main").unwrap();
    assert_eq!(metas.iter().map(|m| m.id).collect::<Vec<_>>(), vec![second, first]);
    assert_eq!(metas[0].principle_count, 4);
    assert_eq!(metas[0].signal_count, 4);
    assert_eq!(metas[0].axiom_count, 0);
    assert_eq!(metas[0].checksum.len(), 64);
    assert!(metas[0].byte_len > 36);
}

#[test]
fn prune_keeps_newest() {
    let storage = SnapshotStorage::open_in_memory().unwrap();
    let ids: Vec<i64> = (1..=5).map(|n| storage.save("main", &sample_store(n)).unwrap()).collect();
    storage.save("other", &sample_store(1)).unwrap();

    assert_eq!(storage.prune("main", 2).unwrap(), 3);
    let kept: Vec<i64> = storage.list("main").unwrap().iter().map(|m| m.id).collect();
    assert_eq!(kept, vec![ids[4], ids[3]]);
    assert_eq!(storage.list("other").unwrap().len(), 1);
    assert_eq!(storage.prune("main", 2).unwrap(), 0);
}

#[test]
fn unknown_id_is_not_found() {
    let storage = SnapshotStorage::open_in_memory().unwrap();
    let err = storage.load(42).unwrap_err();
    assert!(matches!(
        err,
        TenetError::StorageError(StorageError::SnapshotNotFound { .. })
    ));
}

#[test]
fn file_backed_store_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tenet.db");
    let store = sample_store(2);

    let id = {
        let storage = SnapshotStorage::open(&path).unwrap();
        storage
            .connection()
            .with_conn(|conn| {
                assert!(verify_wal_mode(conn)?);
                Ok(())
            })
            .unwrap();
        storage.save("main", &store).unwrap()
    };

    let reopened = SnapshotStorage::open(&path).unwrap();
    assert_eq!(reopened.load(id).unwrap(), store);
    assert_eq!(
        reopened
            .connection()
            .with_conn(tenet_storage::migrations::current_version)
            .unwrap(),
        1
    );
}

#[test]
fn tampered_blob_is_reported_corrupt() {
    let storage = SnapshotStorage::open_in_memory().unwrap();
    let id = storage.save("main", &sample_store(2)).unwrap();
    storage
        .connection()
        .with_conn(|conn| {
            let mut blob: Vec<u8> = conn
                .query_row("SELECT blob FROM principle_snapshots WHERE id = ?1", [id], |row| row.get(0))
                .unwrap();
            let last = blob.len() - 1;
            blob[last] ^= 0xff;
            conn.execute(
                "UPDATE principle_snapshots SET blob = ?1 WHERE id = ?2",
                rusqlite::params![blob, id],
            )
            .unwrap();
            Ok(())
        })
        .unwrap();

    let err = storage.load(id).unwrap_err();
    assert!(matches!(
        err,
        TenetError::StorageError(StorageError::CorruptSnapshot { .. })
    ));
}
