use dexindex::store::{
    SnapshotStore,
    SqliteSnapshotStore,
};
use dexindex_test_utils::{
    assert_error_message_contains,
    setup_test_environment,
    test_record,
};
use pretty_assertions::assert_eq;

#[test]
fn snapshot_survives_reopening() {
    setup_test_environment();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("dexindex.db");
    let mut records = vec![test_record(1, "bulbasaur"), test_record(122, "mr-mime")];
    records[0].custom_id = Some(1);

    {
        let store = SqliteSnapshotStore::open(&path).unwrap();
        store.put("catalogue_v37", &records).unwrap();
    }

    let store = SqliteSnapshotStore::open(&path).unwrap();
    assert_eq!(store.get("catalogue_v37").unwrap(), Some(records));
}

#[test]
fn put_replaces_previous_snapshot() {
    setup_test_environment();

    let dir = tempfile::tempdir().unwrap();
    let store = SqliteSnapshotStore::open(dir.path().join("dexindex.db")).unwrap();
    store
        .put("catalogue_v37", &[test_record(1, "bulbasaur")])
        .unwrap();
    store
        .put("catalogue_v37", &[test_record(4, "charmander"), test_record(7, "squirtle")])
        .unwrap();

    let records = store.get("catalogue_v37").unwrap().unwrap();
    assert_eq!(
        records.iter().map(|r| r.name.as_str()).collect::<Vec<_>>(),
        vec!["charmander", "squirtle"]
    );
}

#[test]
fn keys_are_independent() {
    setup_test_environment();

    let store = SqliteSnapshotStore::open_in_memory().unwrap();
    store
        .put("catalogue_v36", &[test_record(1, "bulbasaur")])
        .unwrap();
    assert_eq!(store.get("catalogue_v37").unwrap(), None);
    assert_eq!(store.get("catalogue_v36").unwrap().map(|r| r.len()), Some(1));
}

#[test]
fn unusable_path_is_reported() {
    setup_test_environment();

    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "").unwrap();
    assert_error_message_contains(
        SqliteSnapshotStore::open(blocker.join("dexindex.db")),
        "failed to create",
    );
}
