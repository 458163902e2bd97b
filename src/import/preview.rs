//! Pre-commit batch summary, shown to the caregiver before merging.

use crate::models::{ActivityEntry, ActivityType};

/// At most this many rows are carried as representative samples.
pub const SAMPLE_LIMIT: usize = 10;

#[derive(Debug, Clone)]
pub struct PreviewSummary {
    pub total_entries: usize,
    /// (earliest, latest) occurrence, human-readable. None for empty input.
    pub date_range: Option<(String, String)>,
    /// Per-type counts in first-seen order; absent types don't appear.
    pub activity_breakdown: Vec<(ActivityType, usize)>,
    /// First entries of the batch in original order.
    pub sample_entries: Vec<ActivityEntry>,
}

/// Pure summary over a normalized batch; the input is not mutated or
/// re-sorted, so it is safe to call repeatedly for a live preview.
pub fn summarize(entries: &[ActivityEntry]) -> PreviewSummary {
    let mut breakdown: Vec<(ActivityType, usize)> = Vec::new();
    for entry in entries {
        match breakdown.iter_mut().find(|(k, _)| *k == entry.kind) {
            Some((_, count)) => *count += 1,
            None => breakdown.push((entry.kind, 1)),
        }
    }

    let date_range = entries.iter().map(|e| e.time).min().and_then(|earliest| {
        entries
            .iter()
            .map(|e| e.time)
            .max()
            .map(|latest| (format_day(earliest), format_day(latest)))
    });

    PreviewSummary {
        total_entries: entries.len(),
        date_range,
        activity_breakdown: breakdown,
        sample_entries: entries.iter().take(SAMPLE_LIMIT).cloned().collect(),
    }
}

fn format_day(t: chrono::NaiveDateTime) -> String {
    t.format("%b %-d, %Y").to_string()
}
