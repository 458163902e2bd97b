//! Import pipeline: raw file → RawRecords → canonical entries → preview /
//! merge.

pub mod dates;
pub mod merge;
pub mod normalize;
pub mod parser;
pub mod preview;

pub use merge::{MergeOutcome, merge_entries, merge_into_local, merge_into_remote};
pub use normalize::normalize_record;
pub use parser::{ImportFormat, parse_import};
pub use preview::{PreviewSummary, summarize};

use crate::errors::AppResult;
use crate::models::{ActivityEntry, RawRecord};
use crate::utils::table::{Column, Table};
use std::fs;
use std::path::Path;

/// A parsed and normalized import batch, ready for preview and commit.
pub struct ImportBatch {
    pub entries: Vec<ActivityEntry>,
    pub preview: PreviewSummary,
    pub raw_records: Vec<RawRecord>,
}

pub struct ImportLogic;

impl ImportLogic {
    /// Read, parse and normalize an import file in one go.
    ///
    /// Format is picked from the extension; format-level problems fail
    /// here, row-level problems never do (each row normalizes best-effort).
    pub fn load(path: &Path, default_user: &str) -> AppResult<ImportBatch> {
        let format = ImportFormat::from_path(path)?;
        let content = fs::read_to_string(path)?;
        let raw_records = parser::parse_import(&content, format)?;

        let entries: Vec<ActivityEntry> = raw_records
            .iter()
            .flat_map(|r| normalize_record(r, default_user))
            .collect();
        let preview = summarize(&entries);

        Ok(ImportBatch {
            entries,
            preview,
            raw_records,
        })
    }

    /// Print the batch preview: totals, per-type breakdown, date range and
    /// up to ten sample rows.
    pub fn print_preview(batch: &ImportBatch) {
        let p = &batch.preview;

        println!(
            "📋 Parsed {} source rows → {} entries",
            batch.raw_records.len(),
            p.total_entries
        );

        if let Some((earliest, latest)) = &p.date_range {
            println!("📅 Date range: {} → {}", earliest, latest);
        }

        if !p.activity_breakdown.is_empty() {
            let counts = p
                .activity_breakdown
                .iter()
                .map(|(k, n)| format!("{} {}", n, k.at_as_str()))
                .collect::<Vec<_>>()
                .join(", ");
            println!("🐾 Activities: {}", counts);
        }

        if p.sample_entries.is_empty() {
            return;
        }

        let mut table = Table::new(vec![
            Column::new("Time", 16),
            Column::new("Type", 14),
            Column::new("User", 10),
            Column::new("Notes", 30),
        ]);
        for e in &p.sample_entries {
            table.add_row(vec![
                e.time_str(),
                e.kinds_str(),
                e.user.clone(),
                e.notes.clone().unwrap_or_default(),
            ]);
        }

        println!("\nSample entries:\n");
        print!("{}", table.render());
    }
}
