//! Extension archive packaging

pub mod builder;
pub mod extractor;

use crate::error::{BuildError, Result};
use crate::models::{EntryStatus, ExtensionMetadata, PackageReport};
use crate::parser::load_metadata;
use crate::utils::normalize_name;
use chrono::{Local, NaiveDate};
use std::fs;
use std::path::Path;

pub const MANIFEST_FILE: &str = "manifest.json";

/// Files bundled into the archive, in archive order
pub const INCLUDE_FILES: &[&str] = &[
    "manifest.json",
    "background.js",
    "popup.html",
    "popup.js",
    "popup.css",
    "icons/logo16.png",
    "icons/logo48.png",
    "icons/logo128.png",
];

/// `{normalized-name}-v{version}-{YYYYMMDD}.zip`
pub fn archive_file_name(metadata: &ExtensionMetadata, date: NaiveDate) -> String {
    format!(
        "{}-v{}-{}.zip",
        normalize_name(metadata.name()),
        metadata.version(),
        date.format("%Y%m%d")
    )
}

/// Package the extension rooted at `root`, stamped with today's local date
pub fn package_extension(root: &Path) -> Result<PackageReport> {
    package_extension_with(root, |_| {})
}

/// Like [`package_extension`], reporting each entry as it is archived
pub fn package_extension_with(
    root: &Path,
    on_entry: impl FnMut(&EntryStatus),
) -> Result<PackageReport> {
    package_files(root, INCLUDE_FILES, Local::now().date_naive(), on_entry)
}

/// Package the extension rooted at `root` using an explicit date stamp
pub fn package_extension_on(root: &Path, date: NaiveDate) -> Result<PackageReport> {
    package_files(root, INCLUDE_FILES, date, |_| {})
}

/// Package an arbitrary inclusion list. Missing entries are reported, not fatal.
pub fn package_files(
    root: &Path,
    include: &[&str],
    date: NaiveDate,
    on_entry: impl FnMut(&EntryStatus),
) -> Result<PackageReport> {
    let metadata = load_metadata(root.join(MANIFEST_FILE))?;

    let archive_name = archive_file_name(&metadata, date);
    let archive_path = root.join(&archive_name);

    // Always start from an empty archive
    if archive_path.exists() {
        fs::remove_file(&archive_path).map_err(|e| BuildError::io(&archive_path, e))?;
    }

    let entries = builder::write_archive(root, include, &archive_path, on_entry)?;

    let size_bytes = fs::metadata(&archive_path)
        .map_err(|e| BuildError::io(&archive_path, e))?
        .len();
    let archive_path =
        fs::canonicalize(&archive_path).map_err(|e| BuildError::io(&archive_path, e))?;

    Ok(PackageReport {
        archive_name,
        archive_path,
        size_bytes,
        entries,
    })
}

/// Check that the written archive holds exactly the included entries
pub fn verify_package(report: &PackageReport) -> Result<Vec<String>> {
    let mut found = extractor::list_entries(&report.archive_path)?;
    let mut expected: Vec<String> = report.included().map(str::to_string).collect();

    found.sort();
    expected.sort();

    if found != expected {
        return Err(BuildError::VerifyMismatch { expected, found });
    }

    Ok(found)
}
