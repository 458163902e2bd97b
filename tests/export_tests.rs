mod common;
use common::{init_with_sample, paw, temp_out};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_export_csv_all() {
    let (store, db) = init_with_sample("export_csv_all");
    let out = temp_out("export_csv_all", "csv");

    paw()
        .args([
            "--store", &store, "--db", &db, "--test", "export", "--format", "csv", "--file", &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("id,time,type"));
    assert!(content.contains("2025-08-01"));
    assert!(content.contains("2025-08-02"));
    assert!(content.contains("quick break"));
}

#[test]
fn test_export_json_range() {
    let (store, db) = init_with_sample("export_json_range");
    let out = temp_out("export_json_range", "json");

    paw()
        .args([
            "--store", &store, "--db", &db, "--test", "export", "--format", "json", "--file",
            &out, "--range", "2025-08-02",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.contains("2025-08-02T07:15:00"));
    assert!(!content.contains("2025-08-01"));
}

#[test]
fn test_export_refuses_overwrite_without_force() {
    let (store, db) = init_with_sample("export_force");
    let out = temp_out("export_force", "csv");
    fs::write(&out, "already here").unwrap();

    paw()
        .args([
            "--store", &store, "--db", &db, "--test", "export", "--format", "csv", "--file", &out,
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    paw()
        .args([
            "--store", &store, "--db", &db, "--test", "export", "--format", "csv", "--file", &out,
            "--force",
        ])
        .assert()
        .success();

    assert!(fs::read_to_string(&out).unwrap().starts_with("id,time"));
}

#[test]
fn test_export_invalid_range_fails() {
    let (store, db) = init_with_sample("export_bad_range");
    let out = temp_out("export_bad_range", "csv");

    paw()
        .args([
            "--store", &store, "--db", &db, "--test", "export", "--format", "csv", "--file", &out,
            "--range", "nonsense",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid period"));
}
