//! Period expressions shared by `list`, `stats` and `export --range`.

use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Parse a period expression into inclusive date bounds.
///
/// Supports:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - START:END (same granularity on both sides)
pub fn period_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    if let Some((start_raw, end_raw)) = p.split_once(':') {
        let start = start_raw.trim();
        let end = end_raw.trim();

        if start.len() != end.len() {
            return Err(AppError::InvalidPeriod(format!(
                "{} (start and end must have the same format)",
                p
            )));
        }

        let (s, _) = single_bounds(start)?;
        let (_, e) = single_bounds(end)?;
        Ok((s, e))
    } else {
        single_bounds(p.trim())
    }
}

fn single_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    match p.len() {
        // YYYY
        4 => {
            let y: i32 = p
                .parse()
                .map_err(|_| AppError::InvalidPeriod(p.to_string()))?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1)
                .ok_or_else(|| AppError::InvalidPeriod(p.to_string()))?;
            let d2 = NaiveDate::from_ymd_opt(y, 12, 31)
                .ok_or_else(|| AppError::InvalidPeriod(p.to_string()))?;
            Ok((d1, d2))
        }
        // YYYY-MM
        7 => {
            let first = NaiveDate::parse_from_str(&format!("{}-01", p), "%Y-%m-%d")
                .map_err(|_| AppError::InvalidPeriod(p.to_string()))?;
            let last = month_last_day(first)
                .ok_or_else(|| AppError::InvalidPeriod(p.to_string()))?;
            Ok((first, last))
        }
        // YYYY-MM-DD
        10 => {
            let d = parse_date(p).ok_or_else(|| AppError::InvalidPeriod(p.to_string()))?;
            Ok((d, d))
        }
        _ => Err(AppError::InvalidPeriod(p.to_string())),
    }
}

fn month_last_day(first: NaiveDate) -> Option<NaiveDate> {
    use chrono::Datelike;
    let (y, m) = (first.year(), first.month());
    let next_first = if m == 12 {
        NaiveDate::from_ymd_opt(y + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(y, m + 1, 1)
    }?;
    next_first.pred_opt()
}
