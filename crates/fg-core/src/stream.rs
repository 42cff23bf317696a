//! Loosely typed stream metadata recovered from an addon payload.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The JSON object an addon embeds in a streaming reference.
///
/// Addons do not agree on a schema, so the object is kept as-is and the
/// well-known Stremio stream fields are read through accessors. A missing key
/// and a key of the wrong type both read as `None`; unknown keys are
/// preserved when the metadata is serialized again.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StreamMetadata {
    fields: Map<String, Value>,
}

impl StreamMetadata {
    /// Wrap an already-parsed JSON object.
    pub fn from_map(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// The actual media location.
    pub fn url(&self) -> Option<&str> {
        self.str_field("url")
    }

    pub fn name(&self) -> Option<&str> {
        self.str_field("name")
    }

    pub fn description(&self) -> Option<&str> {
        self.str_field("description")
    }

    /// `behaviorHints.filename`, the scene-release name of the file.
    pub fn filename(&self) -> Option<&str> {
        self.hint("filename")
    }

    /// `behaviorHints.bingeGroup`.
    pub fn binge_group(&self) -> Option<&str> {
        self.hint("bingeGroup")
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    fn hint(&self, key: &str) -> Option<&str> {
        self.fields
            .get("behaviorHints")
            .and_then(Value::as_object)
            .and_then(|hints| hints.get(key))
            .and_then(Value::as_str)
    }
}
