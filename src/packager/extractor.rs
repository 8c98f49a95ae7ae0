//! Reading back written archives

use crate::error::{BuildError, Result};
use std::fs;
use std::io::Read;
use std::path::Path;
use zip::ZipArchive;

/// Names of all file entries in the archive, in archive order
pub fn list_entries(archive_path: &Path) -> Result<Vec<String>> {
    let file = fs::File::open(archive_path).map_err(|e| BuildError::io(archive_path, e))?;
    let mut archive = ZipArchive::new(file)?;

    let mut names = Vec::with_capacity(archive.len());
    for i in 0..archive.len() {
        let file = archive.by_index(i)?;
        if file.is_file() {
            names.push(file.name().to_string());
        }
    }

    Ok(names)
}

/// Contents of a single entry
pub fn read_entry(archive_path: &Path, name: &str) -> Result<Vec<u8>> {
    let file = fs::File::open(archive_path).map_err(|e| BuildError::io(archive_path, e))?;
    let mut archive = ZipArchive::new(file)?;

    let mut entry = archive.by_name(name)?;
    let mut content = Vec::new();
    entry
        .read_to_end(&mut content)
        .map_err(|e| BuildError::io(archive_path, e))?;

    Ok(content)
}

/// Modification time recorded for a single entry
pub fn entry_modified(archive_path: &Path, name: &str) -> Result<zip::DateTime> {
    let file = fs::File::open(archive_path).map_err(|e| BuildError::io(archive_path, e))?;
    let mut archive = ZipArchive::new(file)?;
    let entry = archive.by_name(name)?;
    Ok(entry.last_modified())
}
