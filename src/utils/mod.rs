//! Shared helpers

pub mod helpers;

pub use helpers::{format_size_kb, normalize_name};
