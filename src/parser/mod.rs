//! Parsing for manifest metadata

pub mod manifest;

pub use manifest::{load_metadata, parse_metadata};
