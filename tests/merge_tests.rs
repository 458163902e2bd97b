use chrono::{NaiveDate, NaiveDateTime};
use pawlog::import::{MergeOutcome, merge_entries};
use pawlog::models::{ActivityEntry, ActivityType};

fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 8, 1)
        .unwrap()
        .and_hms_opt(h, m, s)
        .unwrap()
}

fn entry(
    id: &str,
    time: NaiveDateTime,
    kind: ActivityType,
    user: &str,
    notes: Option<&str>,
) -> ActivityEntry {
    ActivityEntry {
        id: id.to_string(),
        time,
        user: user.to_string(),
        kind,
        kinds: vec![kind],
        notes: notes.map(|s| s.to_string()),
        details: None,
        mood: None,
        energy: None,
        has_treat: false,
    }
}

#[test]
fn test_exact_duplicate_skipped() {
    let existing = vec![entry(
        "abc123",
        at(9, 39, 0),
        ActivityType::Meal,
        "Alice",
        Some("kibble"),
    )];
    // same minute, different seconds
    let new = vec![entry(
        "imported_1_x",
        at(9, 39, 42),
        ActivityType::Meal,
        "Alice",
        Some("kibble"),
    )];

    let (merged, outcome) = merge_entries(new, existing);
    assert_eq!(outcome, MergeOutcome { imported: 0, skipped: 1, total: 1 });
    assert_eq!(merged.len(), 1);
}

#[test]
fn test_empty_and_absent_notes_compare_equal() {
    let existing = vec![entry("e1", at(9, 0, 0), ActivityType::Potty, "Bob", Some(""))];
    let new = vec![entry("imported_2_x", at(9, 0, 0), ActivityType::Potty, "Bob", None)];

    let (_, outcome) = merge_entries(new, existing);
    assert_eq!(outcome.skipped, 1);
}

#[test]
fn test_near_duplicate_skipped_against_imported_entry() {
    let existing = vec![entry(
        "imported_123_a",
        at(9, 39, 0),
        ActivityType::Meal,
        "Alice",
        Some("from the other app"),
    )];
    // next minute, different notes: not exact, but within 60s of an import
    let new = vec![entry(
        "imported_456_b",
        at(9, 40, 0),
        ActivityType::Meal,
        "Alice",
        Some("re-exported copy"),
    )];

    let (_, outcome) = merge_entries(new, existing);
    assert_eq!(outcome.imported, 0);
    assert_eq!(outcome.skipped, 1);
}

#[test]
fn test_near_duplicate_kept_against_organic_entry() {
    // same shape as above, but the existing entry was logged by hand
    let existing = vec![entry(
        "local_123",
        at(9, 39, 0),
        ActivityType::Meal,
        "Alice",
        Some("logged in the app"),
    )];
    let new = vec![entry(
        "imported_456_b",
        at(9, 40, 0),
        ActivityType::Meal,
        "Alice",
        Some("exported copy"),
    )];

    let (merged, outcome) = merge_entries(new, existing);
    assert_eq!(outcome.imported, 1);
    assert_eq!(outcome.skipped, 0);
    assert_eq!(merged.len(), 2);
}

#[test]
fn test_near_duplicate_requires_same_user_and_type() {
    let existing = vec![entry(
        "imported_1_a",
        at(9, 39, 0),
        ActivityType::Meal,
        "Alice",
        None,
    )];

    let other_user = vec![entry("imported_2_b", at(9, 40, 0), ActivityType::Meal, "Bob", None)];
    let (_, o1) = merge_entries(other_user, existing.clone());
    assert_eq!(o1.imported, 1);

    let other_kind = vec![entry(
        "imported_3_c",
        at(9, 40, 0),
        ActivityType::Potty,
        "Alice",
        None,
    )];
    let (_, o2) = merge_entries(other_kind, existing);
    assert_eq!(o2.imported, 1);
}

#[test]
fn test_merge_is_idempotent() {
    let batch = vec![
        entry("imported_1_a", at(7, 0, 0), ActivityType::Meal, "Dana", Some("breakfast")),
        entry("imported_1_b", at(12, 30, 0), ActivityType::Potty, "Dana", None),
        entry("imported_1_c", at(21, 15, 0), ActivityType::Sleep, "Alex", None),
    ];

    let (merged, first) = merge_entries(batch.clone(), Vec::new());
    assert_eq!(first.imported, 3);
    assert_eq!(first.total, 3);

    let (merged_again, second) = merge_entries(batch, merged);
    assert_eq!(second.imported, 0);
    assert_eq!(second.skipped, 3);
    assert_eq!(second.total, 3);
    assert_eq!(merged_again.len(), 3);
}

#[test]
fn test_merged_collection_sorted_most_recent_first() {
    let existing = vec![entry("e1", at(8, 0, 0), ActivityType::Meal, "Dana", None)];
    let new = vec![
        entry("imported_1_a", at(6, 0, 0), ActivityType::Potty, "Dana", None),
        entry("imported_1_b", at(22, 0, 0), ActivityType::Sleep, "Dana", None),
    ];

    let (merged, _) = merge_entries(new, existing);
    let times: Vec<_> = merged.iter().map(|e| e.time).collect();
    assert_eq!(times, vec![at(22, 0, 0), at(8, 0, 0), at(6, 0, 0)]);
}
