//! Manifest parsing functionality

use crate::error::{BuildError, Result};
use crate::models::ExtensionMetadata;
use anyhow::Context;
use std::path::Path;

/// Parse extension metadata from bytes
pub fn parse_metadata(content: &[u8]) -> anyhow::Result<ExtensionMetadata> {
    let content_str = std::str::from_utf8(content)
        .context("Invalid UTF-8 in manifest.json")?;

    // json5 accepts plain JSON plus comments and trailing commas
    let metadata: ExtensionMetadata = json5::from_str(content_str)
        .context("Failed to parse manifest.json")?;

    Ok(metadata)
}

/// Parse extension metadata from string
pub fn parse_metadata_from_str(content: &str) -> anyhow::Result<ExtensionMetadata> {
    parse_metadata(content.as_bytes())
}

/// Load metadata from a manifest file. Any failure here is fatal for packaging.
pub fn load_metadata(path: impl AsRef<Path>) -> Result<ExtensionMetadata> {
    let path = path.as_ref();
    std::fs::read(path)
        .context("Failed to read manifest file")
        .and_then(|content| parse_metadata(&content))
        .map_err(|source| BuildError::Metadata {
            path: path.to_path_buf(),
            source,
        })
}
