//! Best-effort timestamp resolution for imported rows.
//!
//! Source exports carry dates in several shapes ("July 27, 2025 9:03 AM",
//! ISO strings, "7/27/25", bare times). Each strategy is tried in order and
//! the first success wins; a row with no interpretable date gets the current
//! wall-clock time, so normalization never fails on a date.

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;

/// Generic parses outside this window are treated as mis-parses and
/// rejected, falling through to the next strategy.
const MIN_SANE_YEAR: i32 = 2020;
const MAX_SANE_YEAR: i32 = 2030;

/// Resolve an occurrence time from the record's date field and, failing
/// that, a bare time in its "when" field.
pub fn resolve_timestamp(date_field: Option<&str>, when_field: Option<&str>) -> NaiveDateTime {
    if let Some(raw) = date_field {
        let raw = raw.trim();
        if let Some(dt) = parse_long_format(raw) {
            return dt;
        }
        if let Some(dt) = parse_generic(raw) {
            return dt;
        }
        if let Some(dt) = parse_slash_format(raw) {
            return dt;
        }
    }

    if let Some(raw) = when_field
        && let Some(t) = parse_bare_time(raw.trim())
    {
        return today().and_time(t);
    }

    Local::now().naive_local()
}

/// Primary source format: "<Month name> <day>, <year> <h>:<mm> <AM|PM>".
/// chrono's %I/%p handles the noon/midnight edge cases (12 AM → 0, 12 PM →
/// 12).
fn parse_long_format(s: &str) -> Option<NaiveDateTime> {
    for fmt in ["%B %d, %Y %I:%M %p", "%b %d, %Y %I:%M %p"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }
    None
}

/// Common ISO-ish shapes, accepted only when the year lands in the sane
/// window.
fn parse_generic(s: &str) -> Option<NaiveDateTime> {
    let parsed = chrono::DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.naive_local())
        .ok()
        .or_else(|| {
            [
                "%Y-%m-%dT%H:%M:%S%.f",
                "%Y-%m-%dT%H:%M:%S",
                "%Y-%m-%d %H:%M:%S",
                "%Y-%m-%d %H:%M",
            ]
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        })
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })?;

    if (MIN_SANE_YEAR..=MAX_SANE_YEAR).contains(&parsed.year()) {
        Some(parsed)
    } else {
        None
    }
}

/// MM/DD/YY or MM/DD/YYYY. Two-digit years pivot at 30: 00–30 → 20xx,
/// 31–99 → 19xx.
fn parse_slash_format(s: &str) -> Option<NaiveDateTime> {
    let re = Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{2}|\d{4})$").unwrap();
    let caps = re.captures(s)?;

    let month: u32 = caps[1].parse().ok()?;
    let day: u32 = caps[2].parse().ok()?;
    let mut year: i32 = caps[3].parse().ok()?;

    if caps[3].len() == 2 {
        year += if year <= 30 { 2000 } else { 1900 };
    }

    NaiveDate::from_ymd_opt(year, month, day).and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Bare "H:MM" or "H:MM AM/PM", combined with today's date by the caller.
fn parse_bare_time(s: &str) -> Option<NaiveTime> {
    let re = Regex::new(r"^(\d{1,2}):(\d{2})\s*([AaPp][Mm])?$").unwrap();
    let caps = re.captures(s)?;

    let mut hour: u32 = caps[1].parse().ok()?;
    let minute: u32 = caps[2].parse().ok()?;

    if let Some(m) = caps.get(3) {
        let pm = m.as_str().to_lowercase().starts_with('p');
        hour = match (hour, pm) {
            (12, false) => 0,
            (12, true) => 12,
            (h, true) => h + 12,
            (h, false) => h,
        };
    }

    NaiveTime::from_hms_opt(hour, minute, 0)
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
