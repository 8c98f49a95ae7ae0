//! End-to-end packaging tests against scratch extension directories

use chrono::{Datelike, NaiveDate};
use extpack::packager::{self, extractor, INCLUDE_FILES};
use extpack::{report, BuildError, EntryStatus};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

fn write_manifest(dir: &Path, content: &str) {
    fs::write(dir.join("manifest.json"), content).unwrap();
}

/// Extension with manifest, background script and the small icons only
fn create_partial_extension(dir: &Path) {
    write_manifest(
        dir,
        r#"{
  "manifest_version": 3,
  "name": "PJ Tab Age Grouper",
  "version": "1.2",
  "background": { "service_worker": "background.js" }
}"#,
    );
    fs::write(dir.join("background.js"), "chrome.tabs.query({}, () => {});").unwrap();
    fs::create_dir_all(dir.join("icons")).unwrap();
    fs::write(dir.join("icons/logo16.png"), [1u8; 32]).unwrap();
    fs::write(dir.join("icons/logo48.png"), [2u8; 64]).unwrap();
}

#[test]
fn test_packages_existing_subset() {
    let temp_dir = TempDir::new().unwrap();
    create_partial_extension(temp_dir.path());

    let result = packager::package_extension_on(temp_dir.path(), date()).unwrap();

    assert_eq!(result.archive_name, "pj-tab-age-grouper-v1.2-20261019.zip");
    assert!(result.archive_path.is_absolute());
    assert!(result.archive_path.exists());
    assert_eq!(result.size_bytes, fs::metadata(&result.archive_path).unwrap().len());

    let entries = extractor::list_entries(&result.archive_path).unwrap();
    assert_eq!(
        entries,
        vec!["manifest.json", "background.js", "icons/logo16.png", "icons/logo48.png"]
    );
    assert_eq!(
        extractor::read_entry(&result.archive_path, "icons/logo48.png").unwrap(),
        vec![2u8; 64]
    );
}

#[test]
fn test_reports_one_line_per_entry_in_order() {
    let temp_dir = TempDir::new().unwrap();
    create_partial_extension(temp_dir.path());

    let result = packager::package_extension_on(temp_dir.path(), date()).unwrap();

    let reported: Vec<&str> = result.entries.iter().map(EntryStatus::path).collect();
    assert_eq!(reported, INCLUDE_FILES.to_vec());

    assert_eq!(
        result.missing().collect::<Vec<_>>(),
        vec!["popup.html", "popup.js", "popup.css", "icons/logo128.png"]
    );

}

#[test]
fn test_progress_lines_stream_in_list_order() {
    let temp_dir = TempDir::new().unwrap();
    create_partial_extension(temp_dir.path());

    let mut lines = Vec::new();
    let result = packager::package_files(temp_dir.path(), INCLUDE_FILES, date(), |entry| {
        lines.push(report::entry_line(entry))
    })
    .unwrap();

    assert_eq!(
        lines,
        vec![
            "  + manifest.json",
            "  + background.js",
            "  ! Missing: popup.html",
            "  ! Missing: popup.js",
            "  ! Missing: popup.css",
            "  + icons/logo16.png",
            "  + icons/logo48.png",
            "  ! Missing: icons/logo128.png",
        ]
    );
    assert_eq!(lines.len(), result.entries.len());
}

#[test]
fn test_progress_stops_at_fatal_error() {
    let temp_dir = TempDir::new().unwrap();

    let mut lines = Vec::new();
    let err = packager::package_files(temp_dir.path(), INCLUDE_FILES, date(), |entry| {
        lines.push(report::entry_line(entry))
    })
    .unwrap_err();

    assert!(matches!(err, BuildError::Metadata { .. }));
    assert!(lines.is_empty());
}

#[test]
fn test_entries_keep_file_modification_time() {
    let temp_dir = TempDir::new().unwrap();
    create_partial_extension(temp_dir.path());

    let result = packager::package_extension_on(temp_dir.path(), date()).unwrap();

    for name in ["manifest.json", "icons/logo16.png"] {
        let stamp = extractor::entry_modified(&result.archive_path, name).unwrap();
        let (year, month, day) = (stamp.year(), stamp.month(), stamp.day());
        assert_ne!((year, month, day), (1980, 1, 1), "{} lost its timestamp", name);

        let modified = fs::metadata(temp_dir.path().join(name)).unwrap().modified().unwrap();
        let local: chrono::DateTime<chrono::Local> = modified.into();
        assert_eq!(i32::from(year), local.year());
        assert_eq!(u32::from(month), local.month());
        assert_eq!(u32::from(day), local.day());
    }
}

#[test]
fn test_numeric_version_is_accepted() {
    let temp_dir = TempDir::new().unwrap();
    write_manifest(temp_dir.path(), r#"{"name": "A B", "version": 2}"#);

    let result = packager::package_extension_on(temp_dir.path(), date()).unwrap();
    assert_eq!(result.archive_name, "a-b-v2-20261019.zip");
}

#[test]
fn test_rerun_replaces_archive() {
    let temp_dir = TempDir::new().unwrap();
    create_partial_extension(temp_dir.path());

    let first = packager::package_extension_on(temp_dir.path(), date()).unwrap();
    fs::write(temp_dir.path().join("popup.js"), "// popup").unwrap();
    let second = packager::package_extension_on(temp_dir.path(), date()).unwrap();

    assert_eq!(first.archive_path, second.archive_path);

    let zips: Vec<_> = fs::read_dir(temp_dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().and_then(|x| x.to_str()) == Some("zip"))
        .collect();
    assert_eq!(zips.len(), 1);

    let entries = extractor::list_entries(&second.archive_path).unwrap();
    assert_eq!(entries.len(), 5);
    assert!(entries.contains(&"popup.js".to_string()));
}

#[test]
fn test_stale_archive_contents_are_dropped() {
    let temp_dir = TempDir::new().unwrap();
    write_manifest(temp_dir.path(), r#"{"name": "Tabs", "version": "3"}"#);
    fs::write(temp_dir.path().join("tabs-v3-20261019.zip"), b"not a zip").unwrap();

    let result = packager::package_extension_on(temp_dir.path(), date()).unwrap();

    assert_eq!(
        extractor::list_entries(&result.archive_path).unwrap(),
        vec!["manifest.json"]
    );
}

#[test]
fn test_manifest_defaults() {
    let temp_dir = TempDir::new().unwrap();
    write_manifest(temp_dir.path(), "{}");

    let result = packager::package_extension_on(temp_dir.path(), date()).unwrap();
    assert_eq!(result.archive_name, "extension-v1.0-20261019.zip");
}

#[test]
fn test_missing_manifest_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("background.js"), "").unwrap();

    let err = packager::package_extension_on(temp_dir.path(), date()).unwrap_err();
    assert!(matches!(err, BuildError::Metadata { .. }));

    let zips = fs::read_dir(temp_dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().and_then(|x| x.to_str()) == Some("zip"))
        .count();
    assert_eq!(zips, 0);
}

#[test]
fn test_unparseable_manifest_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    write_manifest(temp_dir.path(), "{ name: ");

    let err = packager::package_extension_on(temp_dir.path(), date()).unwrap_err();
    assert!(matches!(err, BuildError::Metadata { .. }));
}

#[test]
fn test_verify_package() {
    let temp_dir = TempDir::new().unwrap();
    create_partial_extension(temp_dir.path());

    let mut result = packager::package_extension_on(temp_dir.path(), date()).unwrap();
    assert_eq!(packager::verify_package(&result).unwrap().len(), 4);

    result.entries.push(EntryStatus::Included("popup.css".into()));
    let err = packager::verify_package(&result).unwrap_err();
    assert!(matches!(err, BuildError::VerifyMismatch { .. }));
}

#[test]
fn test_package_extension_uses_todays_date() {
    let temp_dir = TempDir::new().unwrap();
    write_manifest(temp_dir.path(), r#"{"name": "X Y", "version": "2.3"}"#);

    let today = chrono::Local::now().date_naive();
    let result = packager::package_extension(temp_dir.path()).unwrap();

    // Tolerate a midnight rollover between the two clock reads
    let tomorrow = today.succ_opt().unwrap();
    let candidates = [
        format!("x-y-v2.3-{}.zip", today.format("%Y%m%d")),
        format!("x-y-v2.3-{}.zip", tomorrow.format("%Y%m%d")),
    ];
    assert!(candidates.contains(&result.archive_name));
}
