mod common;
use common::{SAMPLE_CSV, init_with_sample, paw, setup_test_db, setup_test_store, write_fixture};
use predicates::prelude::*;
use std::fs;
use std::path::Path;

#[test]
fn test_init_creates_store_and_database() {
    let store = setup_test_store("cli_init");
    let db = setup_test_db("cli_init");

    paw()
        .args(["--store", &store, "--db", &db, "--test", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("initialization completed"));

    assert!(Path::new(&store).exists());
    assert!(Path::new(&db).exists());
}

#[test]
fn test_import_dry_run_writes_nothing() {
    let store = setup_test_store("cli_dry_run");
    let db = setup_test_db("cli_dry_run");
    let fixture = write_fixture("cli_dry_run", "csv", SAMPLE_CSV);

    paw()
        .args([
            "--store", &store, "--db", &db, "--test", "import", &fixture, "--dry-run",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 entries"))
        .stdout(predicate::str::contains("Dry run"));

    assert!(!Path::new(&store).exists());
}

#[test]
fn test_import_csv_commits_entries() {
    let store = setup_test_store("cli_import");
    let db = setup_test_db("cli_import");
    let fixture = write_fixture("cli_import", "csv", SAMPLE_CSV);

    paw()
        .args([
            "--store", &store, "--db", &db, "--test", "import", &fixture, "--yes",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Imported 3 entries, skipped 0 duplicates",
        ));

    let doc: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&store).expect("read store")).expect("store json");
    let entries = doc["activity_entries"].as_array().expect("entries array");
    assert_eq!(entries.len(), 3);

    // scenario row: potty by Dana at 21:39
    let potty = entries
        .iter()
        .find(|e| e["type"] == "potty")
        .expect("potty entry");
    assert_eq!(potty["user"], "Dana");
    assert!(
        potty["time"]
            .as_str()
            .unwrap()
            .starts_with("2025-08-01T21:39")
    );
}

#[test]
fn test_reimport_skips_all_duplicates() {
    let (store, db) = init_with_sample("cli_reimport");
    let fixture = write_fixture("cli_reimport_again", "csv", SAMPLE_CSV);

    paw()
        .args([
            "--store", &store, "--db", &db, "--test", "import", &fixture, "--yes",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Imported 0 entries, skipped 3 duplicates",
        ));
}

#[test]
fn test_import_json_array() {
    let store = setup_test_store("cli_import_json");
    let db = setup_test_db("cli_import_json");
    let fixture = write_fixture(
        "cli_import_json",
        "json",
        r#"[{"Date/Time": "August 3, 2025 6:30 PM", "Type": "grooming", "User": "Alex"},
            {"Date/Time": "August 3, 2025 7:00 PM", "Type": "meal", "User": "Alex"}]"#,
    );

    paw()
        .args([
            "--store", &store, "--db", &db, "--test", "import", &fixture, "--yes",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 2 entries"));
}

#[test]
fn test_import_unsupported_extension_fails() {
    let store = setup_test_store("cli_bad_ext");
    let db = setup_test_db("cli_bad_ext");
    let fixture = write_fixture("cli_bad_ext", "xlsx", "whatever");

    paw()
        .args([
            "--store", &store, "--db", &db, "--test", "import", &fixture, "--yes",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported import file type"));
}

#[test]
fn test_import_malformed_json_fails() {
    let store = setup_test_store("cli_bad_json");
    let db = setup_test_db("cli_bad_json");
    let fixture = write_fixture("cli_bad_json", "json", "{broken");

    paw()
        .args([
            "--store", &store, "--db", &db, "--test", "import", &fixture, "--yes",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid JSON import"));
}

#[test]
fn test_import_remote_inserts_into_database() {
    let store = setup_test_store("cli_remote");
    let db = setup_test_db("cli_remote");
    let fixture = write_fixture("cli_remote", "csv", SAMPLE_CSV);

    paw()
        .args([
            "--store", &store, "--db", &db, "--test", "import", &fixture, "--yes", "--remote",
            "--pet", "Biscuit",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Inserted 3 entries for Biscuit (3 total in database)",
        ));

    // local store untouched by a remote import
    assert!(!Path::new(&store).exists());
}

#[test]
fn test_list_shows_imported_entries() {
    let (store, db) = init_with_sample("cli_list");

    paw()
        .args(["--store", &store, "--db", &db, "--test", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dana"))
        .stdout(predicate::str::contains("3 entries"));

    paw()
        .args([
            "--store", &store, "--db", &db, "--test", "list", "--kind", "potty",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 entries"));
}

#[test]
fn test_stats_breakdown() {
    let (store, db) = init_with_sample("cli_stats");

    paw()
        .args(["--store", &store, "--db", &db, "--test", "stats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 entries"))
        .stdout(predicate::str::contains("meal"))
        .stdout(predicate::str::contains("training"));
}

#[test]
fn test_del_removes_entry_by_id() {
    let (store, db) = init_with_sample("cli_del");

    let doc: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&store).unwrap()).unwrap();
    let id = doc["activity_entries"][0]["id"].as_str().unwrap().to_string();

    paw()
        .args(["--store", &store, "--db", &db, "--test", "del", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted entry"));

    let doc: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&store).unwrap()).unwrap();
    assert_eq!(doc["activity_entries"].as_array().unwrap().len(), 2);

    paw()
        .args(["--store", &store, "--db", &db, "--test", "del", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No entry found"));
}

#[test]
fn test_log_records_operations() {
    let (store, db) = init_with_sample("cli_log");

    paw()
        .args(["--store", &store, "--db", &db, "--test", "log", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Internal log"))
        .stdout(predicate::str::contains("import"));
}
