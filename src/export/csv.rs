use crate::models::ActivityEntry;
use csv::Writer;

/// Write the entries as CSV to the given file.
pub fn write_csv(path: &str, entries: &[ActivityEntry]) -> std::io::Result<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record([
        "id", "time", "type", "types", "user", "notes", "details", "mood", "energy", "has_treat",
    ])?;

    for e in entries {
        wtr.write_record(&[
            e.id.clone(),
            e.time.format("%Y-%m-%dT%H:%M:%S").to_string(),
            e.kind.at_as_str().to_string(),
            e.kinds_str(),
            e.user.clone(),
            e.notes.clone().unwrap_or_default(),
            e.details.clone().unwrap_or_default(),
            e.mood.clone().unwrap_or_default(),
            e.energy.map(|x| x.as_str().to_string()).unwrap_or_default(),
            e.has_treat.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
