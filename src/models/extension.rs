//! Packaging results

use std::fmt;
use std::path::PathBuf;

/// Outcome for a single inclusion-list entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryStatus {
    Included(String),
    Missing(String),
}

impl EntryStatus {
    pub fn path(&self) -> &str {
        match self {
            Self::Included(path) | Self::Missing(path) => path,
        }
    }

    pub fn is_included(&self) -> bool {
        matches!(self, Self::Included(_))
    }
}

impl fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Included(path) => write!(f, "  + {}", path),
            Self::Missing(path) => write!(f, "  ! Missing: {}", path),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PackageReport {
    pub archive_name: String,
    /// Absolute path of the written archive
    pub archive_path: PathBuf,
    pub size_bytes: u64,
    /// One status per inclusion-list entry, in list order
    pub entries: Vec<EntryStatus>,
}

impl PackageReport {
    pub fn included(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|e| e.is_included())
            .map(|e| e.path())
    }

    pub fn missing(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|e| !e.is_included())
            .map(|e| e.path())
    }
}
