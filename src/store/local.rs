//! Local entry store: a JSON key-value file holding the full activity
//! collection as an array under a single well-known key.
//!
//! Reads load the whole collection, writes replace it. Observers subscribed
//! to the store are notified with the logical key after every successful
//! write so other views of the same file can refresh. Two concurrent
//! writers race last-writer-wins; callers needing stronger guarantees must
//! serialize imports themselves.

use crate::errors::{AppError, AppResult};
use crate::models::ActivityEntry;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Key the entry collection lives under.
pub const ENTRIES_KEY: &str = "activity_entries";

type Listener = Box<dyn Fn(&str)>;

pub struct LocalStore {
    path: PathBuf,
    listeners: Vec<Listener>,
}

impl LocalStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            listeners: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Register an observer called with the logical key after each
    /// successful write.
    pub fn subscribe(&mut self, listener: impl Fn(&str) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Load the full entry collection. A missing or empty file reads as an
    /// empty collection; a corrupt one is an error.
    pub fn load_entries(&self) -> AppResult<Vec<ActivityEntry>> {
        let doc = self.read_doc()?;
        match doc.get(ENTRIES_KEY) {
            Some(value) => serde_json::from_value(value.clone())
                .map_err(|e| AppError::Store(format!("corrupt entry collection: {}", e))),
            None => Ok(Vec::new()),
        }
    }

    /// Replace the full entry collection and notify observers. Other keys
    /// in the store file are preserved.
    pub fn save_entries(&mut self, entries: &[ActivityEntry]) -> AppResult<()> {
        let mut doc = self.read_doc()?;
        doc.insert(
            ENTRIES_KEY.to_string(),
            serde_json::to_value(entries)
                .map_err(|e| AppError::Store(format!("serialize entries: {}", e)))?,
        );

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let text = serde_json::to_string_pretty(&Value::Object(doc))
            .map_err(|e| AppError::Store(e.to_string()))?;
        fs::write(&self.path, text)?;

        self.notify(ENTRIES_KEY);
        Ok(())
    }

    fn read_doc(&self) -> AppResult<Map<String, Value>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }

        let text = fs::read_to_string(&self.path)?;
        if text.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str::<Value>(&text) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(AppError::Store(format!(
                "store file {} is not a JSON object",
                self.path.display()
            ))),
            Err(e) => Err(AppError::Store(format!(
                "store file {}: {}",
                self.path.display(),
                e
            ))),
        }
    }

    fn notify(&self, key: &str) {
        for listener in &self.listeners {
            listener(key);
        }
    }
}
