mod memory;
mod snapshot_store;
mod sqlite;

pub use memory::MemorySnapshotStore;
pub use snapshot_store::SnapshotStore;
pub use sqlite::SqliteSnapshotStore;
