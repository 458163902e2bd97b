//! Import file parsing: CSV or JSON → ordered RawRecord list.

use crate::errors::{AppError, AppResult};
use crate::models::RawRecord;
use serde_json::Value;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportFormat {
    Csv,
    Json,
}

impl ImportFormat {
    /// Pick the format from the file extension. Anything but `.csv` /
    /// `.json` is rejected up front.
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "csv" => Ok(ImportFormat::Csv),
            "json" => Ok(ImportFormat::Json),
            _ => Err(AppError::UnsupportedImport(
                path.to_string_lossy().to_string(),
            )),
        }
    }
}

/// Parse raw file content into RawRecords.
pub fn parse_import(content: &str, format: ImportFormat) -> AppResult<Vec<RawRecord>> {
    match format {
        ImportFormat::Csv => parse_csv(content),
        ImportFormat::Json => parse_json(content),
    }
}

/// CSV: first line is always the header row; data rows are zipped against
/// the headers positionally. Missing trailing fields read as empty strings,
/// rows blank across all fields are dropped.
pub fn parse_csv(content: &str) -> AppResult<Vec<RawRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = rdr
        .headers()?
        .iter()
        .enumerate()
        .map(|(i, h)| {
            // exports from spreadsheet tools carry a BOM on the first cell
            let h = if i == 0 { h.trim_start_matches('\u{feff}') } else { h };
            h.to_string()
        })
        .collect();

    let mut out = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let raw: RawRecord = headers
            .iter()
            .enumerate()
            .map(|(i, h)| (h.clone(), record.get(i).unwrap_or("").to_string()))
            .collect();

        if !raw.is_blank() {
            out.push(raw);
        }
    }

    if out.is_empty() {
        return Err(AppError::EmptyImport);
    }
    Ok(out)
}

/// JSON: a single object or an array of objects. Scalar values are
/// stringified; null is treated as absent; nested structures are kept as
/// compact JSON text.
pub fn parse_json(content: &str) -> AppResult<Vec<RawRecord>> {
    let value: Value = serde_json::from_str(content)?;

    let objects = match value {
        Value::Object(obj) => vec![obj],
        Value::Array(items) => items
            .into_iter()
            .filter_map(|v| match v {
                Value::Object(obj) => Some(obj),
                _ => None,
            })
            .collect(),
        other => {
            return Err(AppError::Import(format!(
                "JSON import must be an object or an array of objects, got {}",
                json_kind(&other)
            )));
        }
    };

    let mut out = Vec::new();
    for obj in objects {
        let mut raw = RawRecord::new();
        for (key, value) in obj {
            match value {
                Value::Null => {}
                Value::String(s) => raw.insert(key, s),
                Value::Bool(b) => raw.insert(key, b.to_string()),
                Value::Number(n) => raw.insert(key, n.to_string()),
                nested => raw.insert(key, nested.to_string()),
            }
        }
        if !raw.is_blank() {
            out.push(raw);
        }
    }

    Ok(out)
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
