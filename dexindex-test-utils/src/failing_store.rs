use std::sync::atomic::{
    AtomicUsize,
    Ordering,
};

use dexindex::{
    PersistenceError,
    store::SnapshotStore,
};
use dexindex_data::Record;

/// [`SnapshotStore`] whose every operation fails.
#[derive(Debug, Default)]
pub struct FailingSnapshotStore {
    gets: AtomicUsize,
    puts: AtomicUsize,
}

impl FailingSnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gets(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }

    pub fn puts(&self) -> usize {
        self.puts.load(Ordering::SeqCst)
    }
}

impl SnapshotStore for FailingSnapshotStore {
    fn get(&self, _: &str) -> Result<Option<Vec<Record>>, PersistenceError> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        Err(PersistenceError::Unavailable("storage is disabled".to_owned()))
    }

    fn put(&self, _: &str, _: &[Record]) -> Result<(), PersistenceError> {
        self.puts.fetch_add(1, Ordering::SeqCst);
        Err(PersistenceError::Unavailable("storage is full".to_owned()))
    }
}
