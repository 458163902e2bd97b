use super::{activity_type::ActivityType, energy::EnergyLevel};
use chrono::{Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Id prefix marking entries that came through the importer rather than
/// normal logging. Near-duplicate suppression only ever matches against
/// entries carrying this tag.
pub const IMPORT_ID_PREFIX: &str = "imported_";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityEntry {
    pub id: String,
    pub time: NaiveDateTime, // occurrence time, local interpretation
    pub user: String,
    #[serde(rename = "type")]
    pub kind: ActivityType, // primary type, always kinds[0]
    #[serde(rename = "types")]
    pub kinds: Vec<ActivityType>, // deduplicated, insertion order, never empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy: Option<EnergyLevel>,
    #[serde(default)]
    pub has_treat: bool,
}

impl ActivityEntry {
    /// Constructor for entries produced by the importer.
    /// - Generates a provenance-tagged id (`imported_<millis>_<suffix>`)
    /// - Sets `kind` to the first resolved type
    pub fn new_imported(
        time: NaiveDateTime,
        user: String,
        kinds: Vec<ActivityType>,
        notes: Option<String>,
        details: Option<String>,
        mood: Option<String>,
        energy: Option<EnergyLevel>,
        has_treat: bool,
    ) -> Self {
        debug_assert!(!kinds.is_empty());
        Self {
            id: import_id(),
            time,
            user,
            kind: kinds[0],
            kinds,
            notes,
            details,
            mood,
            energy,
            has_treat,
        }
    }

    pub fn is_imported(&self) -> bool {
        self.id.starts_with(IMPORT_ID_PREFIX)
    }

    /// Occurrence time truncated to the whole minute, used as the duplicate
    /// comparison key (absorbs sub-minute jitter between imports).
    pub fn minute_key(&self) -> NaiveDateTime {
        self.time
            .with_second(0)
            .and_then(|t| t.with_nanosecond(0))
            .unwrap_or(self.time)
    }

    pub fn time_str(&self) -> String {
        self.time.format("%Y-%m-%d %H:%M").to_string()
    }

    pub fn date_str(&self) -> String {
        self.time.format("%Y-%m-%d").to_string()
    }

    /// "potty" or "meal+training" for multi-type entries.
    pub fn kinds_str(&self) -> String {
        self.kinds
            .iter()
            .map(|k| k.at_as_str())
            .collect::<Vec<_>>()
            .join("+")
    }
}

/// Fresh import id: current millis plus a random suffix, unique within a
/// batch and distinguishable from organically-logged entries.
fn import_id() -> String {
    let millis = Local::now().timestamp_millis();
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{}{}_{}", IMPORT_ID_PREFIX, millis, &suffix[..8])
}
