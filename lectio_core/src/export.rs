//! CSV export/import of generated schedules.
//!
//! The CSV shape is the handoff format for external persistence and
//! display collaborators; the core never needs to read its own export.

use crate::types::ScheduleEntry;
use crate::Result;
use csv::{ReaderBuilder, WriterBuilder};
use std::path::Path;

/// Write a schedule to a CSV file, returning the number of rows written
pub fn write_schedule_csv(path: &Path, entries: &[ScheduleEntry]) -> Result<usize> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut writer = WriterBuilder::new().has_headers(true).from_path(path)?;
    for entry in entries {
        writer.serialize(entry)?;
    }
    writer.flush()?;

    tracing::info!("Wrote {} schedule rows to {:?}", entries.len(), path);
    Ok(entries.len())
}

/// Read a schedule back from a CSV file
///
/// Rows that fail to parse are logged and skipped rather than failing the
/// whole read.
pub fn read_schedule_csv(path: &Path) -> Result<Vec<ScheduleEntry>> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_path(path)?;

    let mut entries = Vec::new();
    for result in reader.deserialize::<ScheduleEntry>() {
        match result {
            Ok(entry) => entries.push(entry),
            Err(e) => {
                tracing::warn!("Failed to parse schedule row: {}", e);
            }
        }
    }

    tracing::debug!("Read {} schedule rows from {:?}", entries.len(), path);
    Ok(entries)
}
