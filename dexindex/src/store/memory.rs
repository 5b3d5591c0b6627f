use std::{
    collections::HashMap,
    sync::Mutex,
};

use dexindex_data::Record;

use crate::{
    PersistenceError,
    store::SnapshotStore,
};

/// [`SnapshotStore`] that lives only as long as the process.
#[derive(Debug, Default)]
pub struct MemorySnapshotStore {
    snapshots: Mutex<HashMap<String, Vec<Record>>>,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn snapshots(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, HashMap<String, Vec<Record>>>, PersistenceError> {
        self.snapshots
            .lock()
            .map_err(|_| PersistenceError::Unavailable("snapshot map is poisoned".to_owned()))
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn get(&self, key: &str) -> Result<Option<Vec<Record>>, PersistenceError> {
        Ok(self.snapshots()?.get(key).cloned())
    }

    fn put(&self, key: &str, records: &[Record]) -> Result<(), PersistenceError> {
        self.snapshots()?.insert(key.to_owned(), records.to_vec());
        Ok(())
    }
}
