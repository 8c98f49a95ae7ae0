//! Console lines printed by the build tools

use crate::models::{EntryStatus, IconSpec, PackageReport};
use crate::utils::format_size_kb;

pub const PACKAGE_BANNER: &str = "Building Chrome Extension zip...";

/// `  + {path}` or `  ! Missing: {path}`
pub fn entry_line(status: &EntryStatus) -> String {
    status.to_string()
}

/// `Created: {name} ({size} KB)`
pub fn package_summary(report: &PackageReport) -> String {
    format!(
        "Created: {} ({})",
        report.archive_name,
        format_size_kb(report.size_bytes)
    )
}

pub fn package_location(report: &PackageReport) -> String {
    format!("Location: {}", report.archive_path.display())
}

/// Confirmation line for one written icon
pub fn icon_line(spec: &IconSpec) -> String {
    let path = spec.output_path();
    let path = path.to_string_lossy().replace('\\', "/");
    match *spec {
        IconSpec::Direct { size } => format!("Created {} ({}x{})", path, size, size),
        IconSpec::Padded { size, inner } => format!(
            "Created {} ({}x{} centered in {}x{} with padding)",
            path, inner, inner, size, size
        ),
    }
}
