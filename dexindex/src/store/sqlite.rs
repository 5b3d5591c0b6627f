use std::{
    path::Path,
    sync::{
        Mutex,
        MutexGuard,
    },
};

use anyhow::{
    Context,
    Result,
};
use dexindex_data::Record;
use rusqlite::{
    Connection,
    OptionalExtension,
};

use crate::{
    PersistenceError,
    store::SnapshotStore,
};

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS snapshots (
    key TEXT PRIMARY KEY,
    data TEXT NOT NULL,
    updated_at INTEGER NOT NULL DEFAULT (strftime('%s', 'now'))
);";

/// [`SnapshotStore`] backed by a SQLite database.
///
/// Each snapshot is one row holding the whole record array as JSON.
#[derive(Debug)]
pub struct SqliteSnapshotStore {
    db: Mutex<Connection>,
}

impl SqliteSnapshotStore {
    /// Opens or creates the database at `path`.
    pub fn open<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let db = Connection::open(path)
            .with_context(|| format!("failed to open snapshot database at {}", path.display()))?;
        db.execute_batch("PRAGMA journal_mode=WAL;")?;
        db.execute_batch(SCHEMA)?;
        log::info!("Opened snapshot database at {}", path.display());
        Ok(Self { db: Mutex::new(db) })
    }

    /// Opens a database that is discarded when the store is dropped.
    pub fn open_in_memory() -> Result<Self> {
        let db = Connection::open_in_memory()?;
        db.execute_batch(SCHEMA)?;
        Ok(Self { db: Mutex::new(db) })
    }

    fn db(&self) -> Result<MutexGuard<'_, Connection>, PersistenceError> {
        self.db
            .lock()
            .map_err(|_| PersistenceError::Unavailable("database connection is poisoned".to_owned()))
    }
}

impl SnapshotStore for SqliteSnapshotStore {
    fn get(&self, key: &str) -> Result<Option<Vec<Record>>, PersistenceError> {
        let data: Option<String> = self
            .db()?
            .prepare_cached("SELECT data FROM snapshots WHERE key = ?1")?
            .query_row([key], |row| row.get(0))
            .optional()?;
        data.map(|data| {
            serde_json::from_str(&data).map_err(|source| PersistenceError::Corrupt {
                key: key.to_owned(),
                source,
            })
        })
        .transpose()
    }

    fn put(&self, key: &str, records: &[Record]) -> Result<(), PersistenceError> {
        let data = serde_json::to_string(records).map_err(|source| PersistenceError::Serialize {
            key: key.to_owned(),
            source,
        })?;
        let mut db = self.db()?;
        let tx = db.transaction()?;
        tx.execute(
            "INSERT INTO snapshots (key, data, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now'))
             ON CONFLICT(key) DO UPDATE SET data = ?2, updated_at = strftime('%s', 'now')",
            rusqlite::params![key, data],
        )?;
        tx.commit()?;
        log::debug!("Saved snapshot {key} ({} records)", records.len());
        Ok(())
    }
}

#[cfg(test)]
mod sqlite_snapshot_store_test {
    use assert_matches::assert_matches;

    use crate::{
        PersistenceError,
        store::{
            SnapshotStore,
            SqliteSnapshotStore,
        },
    };

    #[test]
    fn missing_key_is_absent() {
        let store = SqliteSnapshotStore::open_in_memory().unwrap();
        assert_matches!(store.get("catalogue_v37"), Ok(None));
    }

    #[test]
    fn empty_snapshot_is_stored() {
        let store = SqliteSnapshotStore::open_in_memory().unwrap();
        store.put("catalogue_v37", &[]).unwrap();
        assert_matches!(store.get("catalogue_v37"), Ok(Some(records)) => {
            assert!(records.is_empty());
        });
    }

    #[test]
    fn corrupt_data_is_reported() {
        let store = SqliteSnapshotStore::open_in_memory().unwrap();
        store
            .db()
            .unwrap()
            .execute(
                "INSERT INTO snapshots (key, data) VALUES ('catalogue_v37', 'not json')",
                [],
            )
            .unwrap();
        assert_matches!(store.get("catalogue_v37"), Err(PersistenceError::Corrupt { key, .. }) => {
            assert_eq!(key, "catalogue_v37");
        });
    }
}
