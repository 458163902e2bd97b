use serde::{Deserialize, Serialize};

/// Canonical activity vocabulary. Every imported or logged entry carries at
/// least one of these codes; labels that map to nothing become `Note`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Potty,
    Meal,
    Sleep,
    Med,
    Training,
    Grooming,
    Note,
}

impl ActivityType {
    pub fn at_from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "potty" => Some(Self::Potty),
            "meal" => Some(Self::Meal),
            "sleep" => Some(Self::Sleep),
            "med" => Some(Self::Med),
            "training" => Some(Self::Training),
            "grooming" => Some(Self::Grooming),
            "note" => Some(Self::Note),
            _ => None,
        }
    }

    pub fn at_as_str(&self) -> &'static str {
        match self {
            ActivityType::Potty => "potty",
            ActivityType::Meal => "meal",
            ActivityType::Sleep => "sleep",
            ActivityType::Med => "med",
            ActivityType::Training => "training",
            ActivityType::Grooming => "grooming",
            ActivityType::Note => "note",
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        self.at_as_str()
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "potty" => Some(ActivityType::Potty),
            "meal" => Some(ActivityType::Meal),
            "sleep" => Some(ActivityType::Sleep),
            "med" => Some(ActivityType::Med),
            "training" => Some(ActivityType::Training),
            "grooming" => Some(ActivityType::Grooming),
            "note" => Some(ActivityType::Note),
            _ => None,
        }
    }

    pub fn all() -> &'static [ActivityType] {
        &[
            ActivityType::Potty,
            ActivityType::Meal,
            ActivityType::Sleep,
            ActivityType::Med,
            ActivityType::Training,
            ActivityType::Grooming,
            ActivityType::Note,
        ]
    }
}
