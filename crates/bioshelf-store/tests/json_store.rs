//! Integration tests for the JSON-file-backed store.

use bioshelf_model::{BioshelfError, MaterialDraft};
use bioshelf_store::{JsonStore, MaterialStore};

fn reagent_draft(name: &str) -> MaterialDraft {
    MaterialDraft {
        name: name.to_string(),
        type_id: "reagent".to_string(),
        quantity: 100.0,
        unit: "mL".to_string(),
        location: "Lab A".to_string(),
        expiry_date: "2026-01-01".to_string(),
        ..MaterialDraft::default()
    }
}

#[test]
fn open_seeds_a_missing_database() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("db.json");
    let store = JsonStore::open(&path).expect("open");
    assert!(path.exists());
    assert!(store.list().expect("list").is_empty());
    let types = store.types().expect("types");
    assert!(types.iter().any(|t| t.id == "reagent"));
    assert!(store.unit_options().expect("units").allows("reagent", "mL"));
}

#[test]
fn state_round_trips_through_the_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("db.json");

    let created = {
        let mut store = JsonStore::open(&path).expect("open");
        store.create(reagent_draft("Tris Buffer")).expect("create")
    };

    let reopened = JsonStore::open(&path).expect("reopen");
    let listed = reopened.list().expect("list");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0], created);
}

#[test]
fn ids_keep_counting_after_reload() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("db.json");

    let first_id = {
        let mut store = JsonStore::open(&path).expect("open");
        store.create(reagent_draft("a")).expect("create").id
    };
    let second_id = {
        let mut store = JsonStore::open(&path).expect("reopen");
        store.create(reagent_draft("b")).expect("create").id
    };
    assert_ne!(first_id, second_id);
}

#[test]
fn delete_persists() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("db.json");

    {
        let mut store = JsonStore::open(&path).expect("open");
        let created = store.create(reagent_draft("a")).expect("create");
        store.delete(&created.id).expect("delete");
    }
    let reopened = JsonStore::open(&path).expect("reopen");
    assert!(reopened.list().expect("list").is_empty());
}

#[test]
fn corrupt_file_is_reported_not_replaced() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("db.json");
    std::fs::write(&path, "not json at all").expect("write");

    match JsonStore::open(&path) {
        Err(BioshelfError::Corrupt(message)) => {
            assert!(message.contains("db.json"));
        }
        other => panic!("expected corrupt-database error, got {other:?}"),
    }
    // The broken file is left in place for inspection.
    assert_eq!(
        std::fs::read_to_string(&path).expect("read"),
        "not json at all"
    );
}
