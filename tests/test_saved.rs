//! Saved-decks store tests.

use precon_finder::{FinderError, SavedDecks};
use std::fs;

#[test]
fn missing_file_opens_empty() {
    let tmp = tempfile::tempdir().unwrap();
    let saved = SavedDecks::open(tmp.path().join("saved.json")).unwrap();
    assert!(saved.is_empty());
    assert!(!tmp.path().join("saved.json").exists());
}

#[test]
fn toggle_adds_then_removes() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("saved.json");
    let mut saved = SavedDecks::open(&path).unwrap();

    assert!(saved.toggle("cute-squirrels").unwrap());
    assert!(saved.is_saved("cute-squirrels"));
    let on_disk: Vec<String> = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(on_disk, vec!["cute-squirrels"]);

    assert!(!saved.toggle("cute-squirrels").unwrap());
    assert!(!saved.is_saved("cute-squirrels"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
}

#[test]
fn order_persists_across_reopen() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("saved.json");
    {
        let mut saved = SavedDecks::open(&path).unwrap();
        saved.toggle("b").unwrap();
        saved.toggle("a").unwrap();
        saved.toggle("c").unwrap();
    }
    let saved = SavedDecks::open(&path).unwrap();
    assert_eq!(saved.ids(), ["b", "a", "c"]);
    assert_eq!(saved.len(), 3);
}

#[test]
fn remove_and_clear() {
    let tmp = tempfile::tempdir().unwrap();
    let mut saved = SavedDecks::open(tmp.path().join("saved.json")).unwrap();
    saved.toggle("a").unwrap();
    saved.toggle("b").unwrap();

    assert!(saved.remove("a").unwrap());
    assert!(!saved.remove("a").unwrap());
    assert_eq!(saved.ids(), ["b"]);

    saved.clear().unwrap();
    assert!(saved.is_empty());
}

#[test]
fn duplicates_on_disk_are_collapsed() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("saved.json");
    fs::write(&path, r#"["a", "b", "a"]"#).unwrap();

    let saved = SavedDecks::open(&path).unwrap();
    assert_eq!(saved.ids(), ["a", "b"]);
}

#[test]
fn corrupt_file_starts_empty() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("saved.json");
    fs::write(&path, "{not json").unwrap();

    let mut saved = SavedDecks::open(&path).unwrap();
    assert!(saved.is_empty());
    saved.toggle("a").unwrap();
    assert_eq!(SavedDecks::open(&path).unwrap().ids(), ["a"]);
}

#[test]
fn empty_id_is_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    let mut saved = SavedDecks::open(tmp.path().join("saved.json")).unwrap();
    assert!(matches!(saved.toggle("  "), Err(FinderError::InvalidArgument(_))));
}

#[test]
fn parent_directories_are_created() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("nested").join("dir").join("saved.json");
    let mut saved = SavedDecks::open(&path).unwrap();
    saved.toggle("a").unwrap();
    assert!(path.exists());
}

#[test]
fn failed_write_leaves_store_unchanged() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("store");
    fs::create_dir_all(&dir).unwrap();
    let mut saved = SavedDecks::open(dir.join("saved.json")).unwrap();
    assert!(saved.toggle("deck-a").unwrap());

    // the store directory becomes a plain file, so every write fails
    fs::remove_dir_all(&dir).unwrap();
    fs::write(&dir, "not a directory").unwrap();

    assert!(saved.toggle("deck-b").is_err());
    assert!(!saved.is_saved("deck-b"));

    assert!(saved.toggle("deck-a").is_err());
    assert!(saved.is_saved("deck-a"));

    assert!(saved.remove("deck-a").is_err());
    assert!(saved.clear().is_err());
    assert_eq!(saved.ids(), ["deck-a"]);
}
