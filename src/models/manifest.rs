//! Extension metadata as read from manifest.json

use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

pub const DEFAULT_NAME: &str = "extension";
pub const DEFAULT_VERSION: &str = "1.0";

/// The subset of manifest.json the build tools care about.
///
/// Both keys are optional; the accessors fall back to defaults so an
/// incomplete manifest still yields a usable archive name.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExtensionMetadata {
    #[serde(default, deserialize_with = "text_or_number")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "text_or_number")]
    pub version: Option<String>,

    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl ExtensionMetadata {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_NAME)
    }

    pub fn version(&self) -> &str {
        self.version.as_deref().unwrap_or(DEFAULT_VERSION)
    }
}

/// Strings pass through, numbers keep their literal form (`2`, `2.5`).
/// `null` counts as absent.
fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(Value::Number(number)) => Ok(Some(number.to_string())),
        Some(other) => Err(de::Error::custom(format!(
            "expected a string or number, found {}",
            other
        ))),
    }
}
