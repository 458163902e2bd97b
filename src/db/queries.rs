//! Activity table access. `DbPool` doubles as the remote-store stand-in:
//! the import pipeline only ever asks it for bulk inserts.

use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::ActivityEntry;
use crate::store::remote::RemoteStore;
use chrono::Local;
use rusqlite::params;

impl RemoteStore for DbPool {
    /// Transactional batch insert. Either the whole batch lands or none of
    /// it does.
    fn insert_many(
        &mut self,
        pet: &str,
        user: &str,
        entries: &[ActivityEntry],
    ) -> AppResult<usize> {
        let tx = self.conn.transaction()?;
        let created_at = Local::now().to_rfc3339();

        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO activities
                    (id, pet, user, time, kind, kinds, notes, details, mood,
                     energy, has_treat, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
            )?;

            for entry in entries {
                stmt.execute(params![
                    entry.id,
                    pet,
                    user,
                    entry.time.format("%Y-%m-%dT%H:%M:%S").to_string(),
                    entry.kind.to_db_str(),
                    entry.kinds_str(),
                    entry.notes,
                    entry.details,
                    entry.mood,
                    entry.energy.map(|e| e.as_str()),
                    entry.has_treat as i32,
                    created_at,
                ])?;
            }
        }

        tx.commit()?;
        Ok(entries.len())
    }
}

/// Number of stored activity rows, used by `init`/`log` status output.
pub fn count_activities(pool: &DbPool) -> AppResult<usize> {
    let n: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM activities", [], |row| row.get(0))?;
    Ok(n as usize)
}
