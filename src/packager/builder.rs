//! Zip archive writer

use crate::error::{BuildError, Result};
use crate::models::EntryStatus;
use chrono::{DateTime, Datelike, Local, Timelike};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use std::time::SystemTime;
use zip::write::{FileOptions, ZipWriter};
use zip::CompressionMethod;

/// Write every existing `include` entry under `root` into a new archive at
/// `zip_path`. Entry names are the relative paths exactly as listed.
///
/// `on_entry` sees each status as soon as that entry is settled.
pub fn write_archive(
    root: &Path,
    include: &[&str],
    zip_path: &Path,
    mut on_entry: impl FnMut(&EntryStatus),
) -> Result<Vec<EntryStatus>> {
    let file = File::create(zip_path).map_err(|e| BuildError::io(zip_path, e))?;
    let mut zip = ZipWriter::new(file);

    let base_options = FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .unix_permissions(0o644);

    let mut entries = Vec::with_capacity(include.len());

    for relative in include {
        let full_path = root.join(relative);
        if !full_path.is_file() {
            let status = EntryStatus::Missing(relative.to_string());
            on_entry(&status);
            entries.push(status);
            continue;
        }

        let metadata = fs::metadata(&full_path).map_err(|e| BuildError::io(&full_path, e))?;
        let mut options = base_options;
        if let Some(stamp) = metadata.modified().ok().and_then(zip_timestamp) {
            options = options.last_modified_time(stamp);
        }

        let content = fs::read(&full_path).map_err(|e| BuildError::io(&full_path, e))?;
        zip.start_file(*relative, options)?;
        zip.write_all(&content)
            .map_err(|e| BuildError::io(zip_path, e))?;

        let status = EntryStatus::Included(relative.to_string());
        on_entry(&status);
        entries.push(status);
    }

    zip.finish()?;
    Ok(entries)
}

/// Local wall-clock time as a zip DOS timestamp. `None` outside 1980..=2107.
pub fn zip_timestamp(time: SystemTime) -> Option<zip::DateTime> {
    let local: DateTime<Local> = time.into();
    let year = u16::try_from(local.year()).ok()?;

    zip::DateTime::from_date_and_time(
        year,
        local.month() as u8,
        local.day() as u8,
        local.hour() as u8,
        local.minute() as u8,
        local.second().min(59) as u8,
    )
    .ok()
}
