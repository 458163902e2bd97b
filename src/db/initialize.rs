use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the database schema.
/// Idempotent; `init` and every remote-bound command call through here.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS activities (
            id         TEXT PRIMARY KEY,
            pet        TEXT NOT NULL,
            user       TEXT NOT NULL,
            time       TEXT NOT NULL,
            kind       TEXT NOT NULL,
            kinds      TEXT NOT NULL DEFAULT '',
            notes      TEXT,
            details    TEXT,
            mood       TEXT,
            energy     TEXT,
            has_treat  INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_activities_time ON activities(time);
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT NOT NULL DEFAULT '',
            message   TEXT NOT NULL DEFAULT ''
        );",
    )?;
    Ok(())
}
