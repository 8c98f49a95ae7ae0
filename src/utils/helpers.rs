//! Helper utility functions

/// Normalize an extension name for use in archive filenames.
///
/// Only case and spaces change; other characters pass through untouched.
pub fn normalize_name(name: &str) -> String {
    name.replace(' ', "-").to_lowercase()
}

/// Size in kilobytes with one decimal place
pub fn format_size_kb(size_bytes: u64) -> String {
    format!("{:.1} KB", size_bytes as f64 / 1024.0)
}
