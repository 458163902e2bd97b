use crate::errors::AppResult;
use crate::models::ActivityType;
use crate::store::local::LocalStore;
use crate::utils::date::period_bounds;
use crate::utils::table::{Column, Table};

pub struct ListLogic;

impl ListLogic {
    /// Print stored entries, most recent first.
    pub fn list(
        store: &LocalStore,
        period: &Option<String>,
        kind: &Option<String>,
        limit: Option<usize>,
        show_mood: bool,
    ) -> AppResult<()> {
        let mut entries = store.load_entries()?;

        if let Some(expr) = period {
            let (start, end) = period_bounds(expr)?;
            entries.retain(|e| {
                let d = e.time.date();
                d >= start && d <= end
            });
        }

        if let Some(k) = kind {
            let wanted = ActivityType::at_from_str(k)
                .ok_or_else(|| crate::errors::AppError::InvalidActivityType(k.clone()))?;
            entries.retain(|e| e.kinds.contains(&wanted));
        }

        if let Some(n) = limit {
            entries.truncate(n);
        }

        if entries.is_empty() {
            println!("No entries found.");
            return Ok(());
        }

        let mut columns = vec![
            Column::new("Time", 16),
            Column::new("Type", 14),
            Column::new("User", 10),
        ];
        if show_mood {
            columns.push(Column::new("Mood", 6));
        }
        columns.push(Column::new("Notes", 36));

        let mut table = Table::new(columns);
        for e in &entries {
            let mut row = vec![e.time_str(), e.kinds_str(), e.user.clone()];
            if show_mood {
                row.push(e.mood.clone().unwrap_or_default());
            }
            let mut notes = e.notes.clone().unwrap_or_default();
            if let Some(details) = &e.details {
                if notes.is_empty() {
                    notes = details.clone();
                } else {
                    notes = format!("{} ({})", notes, details);
                }
            }
            row.push(notes);
            table.add_row(row);
        }

        print!("{}", table.render());
        println!("\n{} entries", entries.len());
        Ok(())
    }
}
