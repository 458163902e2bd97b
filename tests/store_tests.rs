mod common;
use common::{setup_test_db, setup_test_store};

use chrono::NaiveDate;
use pawlog::db::initialize::init_db;
use pawlog::db::pool::DbPool;
use pawlog::db::queries::count_activities;
use pawlog::import::{merge_into_local, merge_into_remote};
use pawlog::models::{ActivityEntry, ActivityType};
use pawlog::store::local::{ENTRIES_KEY, LocalStore};
use std::cell::Cell;
use std::rc::Rc;

fn entry(id: &str, minute: u32) -> ActivityEntry {
    ActivityEntry {
        id: id.to_string(),
        time: NaiveDate::from_ymd_opt(2025, 8, 1)
            .unwrap()
            .and_hms_opt(9, minute, 0)
            .unwrap(),
        user: "Dana".to_string(),
        kind: ActivityType::Meal,
        kinds: vec![ActivityType::Meal],
        notes: Some(format!("note {}", minute)),
        details: None,
        mood: Some("🙂".to_string()),
        energy: None,
        has_treat: false,
    }
}

#[test]
fn test_missing_store_reads_as_empty() {
    let store = LocalStore::open(setup_test_store("missing_store"));
    assert!(store.load_entries().unwrap().is_empty());
}

#[test]
fn test_save_and_load_round_trip() {
    let mut store = LocalStore::open(setup_test_store("round_trip"));
    let entries = vec![entry("imported_1_a", 0), entry("b2", 5)];

    store.save_entries(&entries).unwrap();
    let loaded = store.load_entries().unwrap();

    assert_eq!(loaded, entries);
    assert!(loaded[0].is_imported());
    assert!(!loaded[1].is_imported());
}

#[test]
fn test_observers_notified_with_entries_key_after_write() {
    let mut store = LocalStore::open(setup_test_store("notify"));

    let hits = Rc::new(Cell::new(0));
    let seen_key = Rc::new(Cell::new(false));
    {
        let hits = Rc::clone(&hits);
        let seen_key = Rc::clone(&seen_key);
        store.subscribe(move |key| {
            hits.set(hits.get() + 1);
            if key == ENTRIES_KEY {
                seen_key.set(true);
            }
        });
    }

    store.save_entries(&[entry("imported_1_a", 0)]).unwrap();
    store.save_entries(&[entry("imported_1_a", 0)]).unwrap();

    assert_eq!(hits.get(), 2);
    assert!(seen_key.get());
}

#[test]
fn test_merge_into_local_persists_and_dedups() {
    let mut store = LocalStore::open(setup_test_store("merge_local"));

    let first = merge_into_local(vec![entry("imported_1_a", 0), entry("imported_1_b", 10)], &mut store)
        .unwrap();
    assert_eq!(first.imported, 2);

    // same events re-imported → everything deduplicated
    let second = merge_into_local(vec![entry("imported_2_a", 0), entry("imported_2_b", 10)], &mut store)
        .unwrap();
    assert_eq!(second.imported, 0);
    assert_eq!(second.skipped, 2);
    assert_eq!(store.load_entries().unwrap().len(), 2);
}

#[test]
fn test_corrupt_store_is_an_error() {
    let path = setup_test_store("corrupt");
    std::fs::write(&path, "this is not json").unwrap();

    let store = LocalStore::open(&path);
    assert!(store.load_entries().is_err());
}

#[test]
fn test_merge_into_remote_inserts_batch() {
    let db_path = setup_test_db("remote_insert");
    let mut pool = DbPool::new(&db_path).expect("open db");
    init_db(&pool.conn).expect("init db");

    let outcome = merge_into_remote(
        vec![entry("imported_1_a", 0), entry("imported_1_b", 10)],
        "Biscuit",
        "Dana",
        &mut pool,
    )
    .unwrap();

    assert_eq!(outcome.imported, 2);
    assert_eq!(count_activities(&pool).unwrap(), 2);
}
