//! Icon generation from a single source image

pub mod resize;

use crate::error::{BuildError, Result};
use crate::models::IconSpec;
use std::path::{Path, PathBuf};

/// Source icon, relative to the working root
pub const SOURCE_ICON: &str = "icons/logo.png";

/// Sizes a browser extension manifest requires
pub const ICON_PLAN: &[IconSpec] = &[
    IconSpec::Direct { size: 16 },
    IconSpec::Direct { size: 48 },
    IconSpec::Padded { size: 128, inner: 96 },
];

pub fn source_path(root: &Path) -> PathBuf {
    root.join(SOURCE_ICON)
}

/// Render and write every icon in [`ICON_PLAN`] from `icons/logo.png` under `root`
pub fn resize_icons(root: &Path) -> Result<Vec<IconSpec>> {
    generate_icons(&source_path(root), root, ICON_PLAN)
}

/// Render every spec in memory, then write them all.
///
/// Nothing is written unless the source decodes and every render succeeds.
pub fn generate_icons(source: &Path, root: &Path, plan: &[IconSpec]) -> Result<Vec<IconSpec>> {
    let source_image = resize::load_source(source)?;

    let rendered: Vec<_> = plan
        .iter()
        .map(|spec| (*spec, resize::render(&source_image, spec)))
        .collect();

    let mut outputs = Vec::with_capacity(rendered.len());
    for (spec, image) in rendered {
        let path = root.join(spec.output_path());
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| BuildError::io(parent, e))?;
        }
        image.save_with_format(&path, image::ImageFormat::Png)?;
        outputs.push(spec);
    }

    Ok(outputs)
}
