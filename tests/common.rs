#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn paw() -> Command {
    cargo_bin_cmd!("pawlog")
}

/// Create a unique test store path inside the system temp dir and remove any
/// existing file
pub fn setup_test_store(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_pawlog.json", name));
    let store_path = path.to_string_lossy().to_string();
    fs::remove_file(&store_path).ok();
    store_path
}

/// Create a unique test DB path inside the system temp dir and remove any
/// existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_pawlog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write an import fixture file and return its path
pub fn write_fixture(name: &str, ext: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_fixture.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::write(&p, content).expect("write fixture");
    p
}

/// A small CSV export in the primary source format, 3 data rows.
pub const SAMPLE_CSV: &str = "\
Date/Time,Entry type?,Logged By?,Notes
\"August 1, 2025 9:39 PM\",potty,Dana,quick break
\"August 2, 2025 7:15 AM\",meal,Dana,breakfast
\"August 2, 2025 8:02 AM\",training,Alex,sit and stay
";

/// Initialize store + DB and import the sample CSV
pub fn init_with_sample(name: &str) -> (String, String) {
    let store = setup_test_store(name);
    let db = setup_test_db(name);

    paw()
        .args(["--store", &store, "--db", &db, "--test", "init"])
        .assert()
        .success();

    let fixture = write_fixture(name, "csv", SAMPLE_CSV);
    paw()
        .args([
            "--store", &store, "--db", &db, "--test", "import", &fixture, "--yes",
        ])
        .assert()
        .success();

    (store, db)
}
