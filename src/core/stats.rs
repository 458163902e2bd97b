use crate::errors::AppResult;
use crate::import::preview;
use crate::store::local::LocalStore;
use crate::utils::date::period_bounds;
use crate::utils::table::{Column, Table};

pub struct StatsLogic;

impl StatsLogic {
    /// Per-type breakdown and date range over the stored collection. Runs
    /// the same summarizer the import preview uses.
    pub fn stats(store: &LocalStore, period: &Option<String>) -> AppResult<()> {
        let mut entries = store.load_entries()?;

        if let Some(expr) = period {
            let (start, end) = period_bounds(expr)?;
            entries.retain(|e| {
                let d = e.time.date();
                d >= start && d <= end
            });
        }

        let summary = preview::summarize(&entries);

        println!("📊 {} entries", summary.total_entries);
        if let Some((earliest, latest)) = &summary.date_range {
            println!("📅 {} → {}", earliest, latest);
        }

        if summary.activity_breakdown.is_empty() {
            return Ok(());
        }

        let mut table = Table::new(vec![Column::new("Type", 10), Column::new("Count", 6)]);
        for (kind, count) in &summary.activity_breakdown {
            table.add_row(vec![kind.at_as_str().to_string(), count.to_string()]);
        }
        println!();
        print!("{}", table.render());

        Ok(())
    }
}
