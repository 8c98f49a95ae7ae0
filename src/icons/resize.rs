//! Resampling and compositing

use crate::error::{BuildError, Result};
use crate::models::IconSpec;
use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use std::path::Path;

/// Lanczos keeps edges crisp at 16px
pub const FILTER: FilterType = FilterType::Lanczos3;

pub fn load_source(path: &Path) -> Result<RgbaImage> {
    let image = image::open(path).map_err(|source| BuildError::SourceImage {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(image.to_rgba8())
}

pub fn render(source: &RgbaImage, spec: &IconSpec) -> RgbaImage {
    match *spec {
        IconSpec::Direct { size } => imageops::resize(source, size, size, FILTER),
        IconSpec::Padded { size, inner } => {
            let content = imageops::resize(source, inner, inner, FILTER);
            let mut canvas = RgbaImage::from_pixel(size, size, Rgba([0, 0, 0, 0]));
            let margin = i64::from(spec.margin());
            // replace, not overlay: pixels are copied as-is
            imageops::replace(&mut canvas, &content, margin, margin);
            canvas
        }
    }
}
