//! Build tools for a browser extension
//!
//! Two independent utilities: a packager that zips a fixed list of extension
//! files into a versioned archive, and an icon resizer that derives the
//! manifest icon sizes from one source image.

pub mod error;
pub mod models;
pub mod parser;
pub mod packager;
pub mod icons;
pub mod report;
pub mod utils;

pub use error::{BuildError, Result};
pub use models::{EntryStatus, ExtensionMetadata, IconSpec, PackageReport};
pub use packager::{package_extension, verify_package};
pub use icons::resize_icons;
