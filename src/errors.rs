//! Unified application error type.
//! All modules (import, store, db, cli, export) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Import errors
    // ---------------------------
    #[error("Unsupported import file type: {0} (expected .csv or .json)")]
    UnsupportedImport(String),

    #[error("Import file contains no data rows")]
    EmptyImport,

    #[error("Invalid import: {0}")]
    Import(String),

    #[error("Invalid JSON import: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid CSV import: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    #[error("Invalid activity type: {0}")]
    InvalidActivityType(String),

    // ---------------------------
    // Store errors
    // ---------------------------
    #[error("Store error: {0}")]
    Store(String),

    #[error("No entry found with id {0}")]
    EntryNotFound(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
