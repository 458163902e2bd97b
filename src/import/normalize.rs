//! Row normalization: RawRecord → canonical ActivityEntry.
//!
//! Header names and activity labels vary across the source apps; both are
//! reconciled through static dictionaries so the normalizer stays a pure
//! function of (record, tables). Rows are normalized independently and a
//! best-effort entry is always produced; a malformed row never aborts the
//! batch.

use crate::import::dates;
use crate::models::{ActivityEntry, ActivityType, EnergyLevel, RawRecord};
use std::collections::HashMap;

/// Internal field names after header reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Field {
    DateTime,
    When,
    Kind,
    PeePoop,
    Notes,
    Vibe,
    Energy,
    Treat,
    User,
}

/// Source header → internal field. Case-sensitive; headers are trimmed and
/// stripped of a leading BOM artifact before lookup.
const FIELD_MAP: &[(&str, Field)] = &[
    ("Date/Time", Field::DateTime),
    ("Date", Field::DateTime),
    ("Timestamp", Field::DateTime),
    ("When?", Field::When),
    ("Time", Field::When),
    ("Entry type?", Field::Kind),
    ("Entry type", Field::Kind),
    ("Type", Field::Kind),
    ("Activity", Field::Kind),
    ("Pee or poo?", Field::PeePoop),
    ("Pee or poo", Field::PeePoop),
    ("Notes", Field::Notes),
    ("Any other notes?", Field::Notes),
    ("Vibe check!", Field::Vibe),
    ("Mood", Field::Vibe),
    ("Energy level?", Field::Energy),
    ("Energy", Field::Energy),
    ("Treat?", Field::Treat),
    ("Treat", Field::Treat),
    ("Logged By?", Field::User),
    ("Logged By", Field::User),
    ("User", Field::User),
];

/// Lowercased source label → canonical types.
///
/// Known multi-activity combinations collapse to a single priority type.
/// That collapse is a source-system decision carried over as-is: downstream
/// consumers rely on the single primary type, and the raw label is kept in
/// the details text instead.
const LABEL_MAP: &[(&str, &[ActivityType])] = &[
    ("potty", &[ActivityType::Potty]),
    ("pee", &[ActivityType::Potty]),
    ("poop", &[ActivityType::Potty]),
    ("potty break", &[ActivityType::Potty]),
    ("meal", &[ActivityType::Meal]),
    ("food", &[ActivityType::Meal]),
    ("feeding", &[ActivityType::Meal]),
    ("snack", &[ActivityType::Meal]),
    ("sleep", &[ActivityType::Sleep]),
    ("nap", &[ActivityType::Sleep]),
    ("med", &[ActivityType::Med]),
    ("meds", &[ActivityType::Med]),
    ("medication", &[ActivityType::Med]),
    ("training", &[ActivityType::Training]),
    ("grooming", &[ActivityType::Grooming]),
    ("bath", &[ActivityType::Grooming]),
    ("brushing", &[ActivityType::Grooming]),
    ("nail trim", &[ActivityType::Grooming]),
    ("note", &[ActivityType::Note]),
    ("other", &[ActivityType::Note]),
    ("meal, training", &[ActivityType::Meal]),
    ("training, meal", &[ActivityType::Meal]),
    ("meal, potty", &[ActivityType::Meal]),
    ("potty, training", &[ActivityType::Potty]),
    ("meds, meal", &[ActivityType::Med]),
];

const DEFAULT_MOOD: &str = "🙂";

/// Normalize one raw record. Currently always yields exactly one entry; the
/// list return type leaves room for sources whose rows expand to several.
pub fn normalize_record(raw: &RawRecord, default_user: &str) -> Vec<ActivityEntry> {
    let fields = reconcile_fields(raw);

    let raw_label = fields.get(&Field::Kind).map(|s| s.as_str());
    let (kinds, multi_label) = resolve_kinds(raw_label);

    let time = dates::resolve_timestamp(
        fields.get(&Field::DateTime).map(|s| s.as_str()),
        fields.get(&Field::When).map(|s| s.as_str()),
    );

    let mut detail_parts = Vec::new();
    if let Some(pp) = fields.get(&Field::PeePoop) {
        detail_parts.push(format!("Potty: {}", pp));
    }
    if let Some(e) = fields.get(&Field::Energy) {
        detail_parts.push(format!("Energy: {}", e));
    }
    if multi_label && let Some(label) = raw_label {
        detail_parts.push(format!("Activities: {}", label.trim()));
    }
    let details = if detail_parts.is_empty() {
        None
    } else {
        Some(detail_parts.join("; "))
    };

    let entry = ActivityEntry::new_imported(
        time,
        fields
            .get(&Field::User)
            .cloned()
            .unwrap_or_else(|| default_user.to_string()),
        kinds,
        fields.get(&Field::Notes).cloned(),
        details,
        Some(
            fields
                .get(&Field::Vibe)
                .cloned()
                .unwrap_or_else(|| DEFAULT_MOOD.to_string()),
        ),
        fields
            .get(&Field::Energy)
            .and_then(|e| EnergyLevel::from_raw(e)),
        fields.get(&Field::Treat).map(|t| t == "Yes").unwrap_or(false),
    );

    vec![entry]
}

/// Map source keys to internal fields, keeping only non-empty values that
/// aren't the literal "None" placeholder. First binding wins.
fn reconcile_fields(raw: &RawRecord) -> HashMap<Field, String> {
    let mut out = HashMap::new();
    for (key, value) in raw.iter() {
        let key = key.trim().trim_start_matches('\u{feff}');
        let Some(field) = lookup_field(key) else {
            continue;
        };

        let value = value.trim();
        if value.is_empty() || value == "None" {
            continue;
        }
        out.entry(field).or_insert_with(|| value.to_string());
    }
    out
}

fn lookup_field(key: &str) -> Option<Field> {
    FIELD_MAP
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, f)| *f)
}

fn lookup_label(label: &str) -> Option<&'static [ActivityType]> {
    LABEL_MAP
        .iter()
        .find(|(k, _)| *k == label)
        .map(|(_, types)| *types)
}

/// Resolve the activity label into canonical types.
///
/// The whole lowercased label is tried against the table first, so known
/// combinations collapse per the table. Unmapped combinations fall through
/// to per-token mapping on comma-split candidates. Returns the deduplicated
/// type list (never empty) and whether the label named several candidates.
fn resolve_kinds(label: Option<&str>) -> (Vec<ActivityType>, bool) {
    let Some(raw) = label else {
        return (vec![ActivityType::Note], false);
    };

    let normalized = raw.trim().to_lowercase();
    let candidates: Vec<&str> = normalized
        .split(',')
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .collect();

    let mut kinds: Vec<ActivityType> = Vec::new();
    if let Some(types) = lookup_label(&normalized) {
        kinds.extend_from_slice(types);
    } else {
        for token in &candidates {
            if let Some(types) = lookup_label(token) {
                for t in types {
                    if !kinds.contains(t) {
                        kinds.push(*t);
                    }
                }
            }
        }
    }

    if kinds.is_empty() {
        kinds.push(ActivityType::Note);
    }

    (kinds, candidates.len() > 1)
}
