//! Integration tests for the on-disk library store

use backlog_library::{GameRecord, LibraryError, LibraryStore};
use tempfile::TempDir;

fn sample_record(game_id: i64, title: &str) -> GameRecord {
    GameRecord {
        game_id,
        title: title.to_string(),
        platform: "PC".to_string(),
        description: None,
        image_url: None,
        score: Some(80),
        done: false,
    }
}

#[test]
fn test_store_survives_reopen() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let db_path = temp_dir.path().join("backlog.db");

    let library_id = {
        let mut store = LibraryStore::open(&db_path).unwrap();
        let library = store.create_library("Switch").unwrap();
        store
            .save_record(library.id, &sample_record(1, "Game A"))
            .unwrap();
        library.id
    };

    let store = LibraryStore::open(&db_path).unwrap();
    let libraries = store.list_libraries().unwrap();
    assert_eq!(libraries.len(), 1);
    assert_eq!(libraries[0].name, "Switch");

    let records = store.list_records(library_id).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].title, "Game A");
}

#[test]
fn test_duplicate_guard_across_reopen() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let db_path = temp_dir.path().join("backlog.db");

    let library_id = {
        let mut store = LibraryStore::open(&db_path).unwrap();
        let library = store.create_library("Backlog").unwrap();
        store
            .save_record(library.id, &sample_record(5, "Celeste"))
            .unwrap();
        library.id
    };

    let mut store = LibraryStore::open(&db_path).unwrap();
    let err = store
        .save_record(library_id, &sample_record(5, "Celeste"))
        .unwrap_err();
    assert!(matches!(err, LibraryError::DuplicateRecord { game_id: 5, .. }));
    assert_eq!(store.record_count(library_id).unwrap(), 1);
}

#[test]
fn test_failed_save_leaves_store_unchanged() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let db_path = temp_dir.path().join("backlog.db");

    let mut store = LibraryStore::open(&db_path).unwrap();
    let library = store.create_library("PC").unwrap();
    store
        .save_record(library.id, &sample_record(1, "Game A"))
        .unwrap();

    let before = store.list_records(library.id).unwrap();
    assert!(store
        .save_record(library.id, &sample_record(1, "Game A"))
        .is_err());
    let after = store.list_records(library.id).unwrap();

    assert_eq!(before, after);
}

#[test]
fn test_delete_library_unreachable_after_reopen() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let db_path = temp_dir.path().join("backlog.db");

    let mut store = LibraryStore::open(&db_path).unwrap();
    let pc = store.create_library("PC").unwrap();
    store.save_record(pc.id, &sample_record(3, "Factorio")).unwrap();
    store.delete_library(pc.id).unwrap();
    drop(store);

    let store = LibraryStore::open(&db_path).unwrap();
    assert_eq!(store.library_count().unwrap(), 0);
    assert!(store.list_records(pc.id).unwrap().is_empty());
}
