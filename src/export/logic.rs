use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, csv, json, notify_export_success};
use crate::store::local::LocalStore;
use crate::utils::date::period_bounds;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Export the stored collection.
    ///
    /// - `file`: absolute path of the output file
    /// - `range`: `None` or an expression like:
    ///   - `YYYY`
    ///   - `YYYY-MM`
    ///   - `YYYY-MM-DD`
    ///   - `START:END`
    pub fn export(
        store: &LocalStore,
        format: &ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);
        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        let mut entries = store.load_entries()?;
        if let Some(expr) = range {
            let (start, end) = period_bounds(expr)?;
            entries.retain(|e| {
                let d = e.time.date();
                d >= start && d <= end
            });
        }

        match format {
            ExportFormat::Csv => csv::write_csv(file, &entries)?,
            ExportFormat::Json => json::write_json(file, &entries)?,
        }

        notify_export_success(format.as_str(), path);
        Ok(())
    }
}

fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if path.exists() && !force {
        return Err(AppError::Export(format!(
            "File {} already exists (use --force to overwrite)",
            path.display()
        )));
    }
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}
