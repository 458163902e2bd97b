use crate::config::Config;
use crate::db;
use crate::errors::{AppError, AppResult};
use crate::store::local::LocalStore;
use crate::ui::messages::success;
use rusqlite::Connection;

pub struct DelLogic;

impl DelLogic {
    /// Remove one entry from the local store by id.
    pub fn del(store: &mut LocalStore, cfg: &Config, id: &str) -> AppResult<()> {
        let mut entries = store.load_entries()?;
        let before = entries.len();
        entries.retain(|e| e.id != id);

        if entries.len() == before {
            return Err(AppError::EntryNotFound(id.to_string()));
        }

        store.save_entries(&entries)?;
        success(format!("Deleted entry {}", id));

        // internal log, non-blocking
        if let Ok(conn) = Connection::open(&cfg.database) {
            let _ = db::log::oplog(&conn, "del", id, "Entry deleted from store");
        }

        Ok(())
    }
}
