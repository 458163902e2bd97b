//! Deduplicating merge of normalized entries into an entry collection.
//!
//! Duplicate detection runs on minute-truncated timestamps so two imports of
//! the same export never double-log an event. Near-duplicate suppression is
//! restricted to previously imported entries: a manually logged event is
//! never silently discarded.

use crate::errors::AppResult;
use crate::models::ActivityEntry;
use crate::store::local::LocalStore;
use crate::store::remote::RemoteStore;
use chrono::Duration;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeOutcome {
    /// New entries that survived dedup.
    pub imported: usize,
    /// New entries dropped as exact or near duplicates.
    pub skipped: usize,
    /// Size of the merged collection.
    pub total: usize,
}

/// Pure merge. Survivors are appended to `existing` and the whole
/// collection is re-sorted most-recent-first. Idempotent: merging a batch
/// against its own output imports nothing.
pub fn merge_entries(
    new_entries: Vec<ActivityEntry>,
    existing: Vec<ActivityEntry>,
) -> (Vec<ActivityEntry>, MergeOutcome) {
    let mut skipped = 0usize;
    let mut survivors = Vec::new();

    for entry in new_entries {
        if existing.iter().any(|e| is_duplicate(&entry, e)) {
            skipped += 1;
        } else {
            survivors.push(entry);
        }
    }

    let imported = survivors.len();
    let mut merged = existing;
    merged.extend(survivors);
    merged.sort_by(|a, b| b.time.cmp(&a.time));

    let outcome = MergeOutcome {
        imported,
        skipped,
        total: merged.len(),
    };
    (merged, outcome)
}

/// Load-merge-save against the local store. On a storage failure the error
/// is surfaced and the store is treated as unchanged; the caller keeps the
/// normalized entries and may retry without re-parsing.
pub fn merge_into_local(
    new_entries: Vec<ActivityEntry>,
    store: &mut LocalStore,
) -> AppResult<MergeOutcome> {
    let existing = store.load_entries()?;
    let (merged, outcome) = merge_entries(new_entries, existing);
    store.save_entries(&merged)?;
    Ok(outcome)
}

/// Insert the batch into a remote table-like store bound to a pet and user.
/// The remote collaborator only exposes inserts, so no read-side dedup runs
/// here.
pub fn merge_into_remote(
    new_entries: Vec<ActivityEntry>,
    pet: &str,
    user: &str,
    store: &mut dyn RemoteStore,
) -> AppResult<MergeOutcome> {
    let imported = store.insert_many(pet, user, &new_entries)?;
    Ok(MergeOutcome {
        imported,
        skipped: 0,
        total: imported,
    })
}

fn is_duplicate(new: &ActivityEntry, existing: &ActivityEntry) -> bool {
    is_exact_duplicate(new, existing) || is_near_duplicate(new, existing)
}

/// Same minute, type, user and notes (absent and empty notes compare equal).
fn is_exact_duplicate(new: &ActivityEntry, existing: &ActivityEntry) -> bool {
    new.minute_key() == existing.minute_key()
        && new.kind == existing.kind
        && new.user == existing.user
        && notes_eq(&new.notes, &existing.notes)
}

/// Within 60 seconds of an entry that itself came from an import.
fn is_near_duplicate(new: &ActivityEntry, existing: &ActivityEntry) -> bool {
    existing.is_imported()
        && new.kind == existing.kind
        && new.user == existing.user
        && (new.minute_key() - existing.minute_key()).abs() <= Duration::seconds(60)
}

fn notes_eq(a: &Option<String>, b: &Option<String>) -> bool {
    a.as_deref().unwrap_or("") == b.as_deref().unwrap_or("")
}
