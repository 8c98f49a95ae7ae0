//! Icon output descriptions

use std::path::PathBuf;

/// How one output icon is derived from the source image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconSpec {
    /// Square resize of the whole source
    Direct { size: u32 },
    /// Resize to `inner`, then center on a transparent `size` canvas
    Padded { size: u32, inner: u32 },
}

impl IconSpec {
    /// Edge length of the written image
    pub fn size(&self) -> u32 {
        match *self {
            Self::Direct { size } | Self::Padded { size, .. } => size,
        }
    }

    /// Offset of the resized content on both axes
    pub fn margin(&self) -> u32 {
        match *self {
            Self::Direct { .. } => 0,
            Self::Padded { size, inner } => size.saturating_sub(inner) / 2,
        }
    }

    /// Relative output path, `icons/logo{size}.png`
    pub fn output_path(&self) -> PathBuf {
        PathBuf::from("icons").join(format!("logo{}.png", self.size()))
    }
}
