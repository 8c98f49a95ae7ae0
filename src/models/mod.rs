//! Core data models for packaging and icon generation

pub mod manifest;
pub mod extension;
pub mod icon;

pub use manifest::*;
pub use extension::*;
pub use icon::*;
