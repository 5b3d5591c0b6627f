use dexindex_data::Record;

use crate::PersistenceError;

/// Durable key-value storage for catalogue snapshots.
///
/// Operations are blocking. Async callers should run them on a blocking thread.
pub trait SnapshotStore: Send + Sync {
    /// Reads the snapshot stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<Vec<Record>>, PersistenceError>;

    /// Replaces the snapshot stored under `key`.
    fn put(&self, key: &str, records: &[Record]) -> Result<(), PersistenceError>;
}
