//! JSON serializer
//!
//! Persists a collection as a single JSON array, the reference file format.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Result, StoreError};

use super::Serializer;

/// JSON array encoding backed by `serde_json`.
///
/// Field names come from the record's serde attributes, so
/// `#[serde(rename = "Name")]` controls the key written to disk.
///
/// `serialize` output reads back as one record only when the record does
/// not itself encode as a JSON array whose elements also parse as `T`.
/// For such records (`serde_json::Value` holding an array, `Vec<Vec<_>>`,
/// an empty `Vec<_>`) the bare value is indistinguishable from a
/// collection and decodes as one. Persist through `serialize_many`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonSerializer {
    pretty: bool,
}

impl JsonSerializer {
    /// Compact output: `[{"a":1},{"a":2}]`, no trailing newline
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Indented, human-editable output. Decodes identically to compact.
    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    /// Whether output is indented
    pub fn is_pretty(&self) -> bool {
        self.pretty
    }

    fn encode<V: Serialize + ?Sized>(&self, value: &V) -> Result<String> {
        let encoded = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        encoded.map_err(|e| StoreError::Encode(e.to_string()))
    }
}

impl<T> Serializer<T> for JsonSerializer
where
    T: Serialize + DeserializeOwned,
{
    fn serialize(&self, value: &T) -> Result<String> {
        self.encode(value)
    }

    fn serialize_many(&self, values: &[T]) -> Result<String> {
        self.encode(values)
    }

    fn deserialize(&self, text: &str) -> Result<Vec<T>> {
        if text.is_empty() {
            return Ok(Vec::new());
        }

        // A bare value is the output of `serialize`: a one-element collection.
        // Text starting with '[' is a collection whenever it parses as one;
        // only then is it tried as a bare array-shaped record.
        if text.trim_start().starts_with('[') {
            match serde_json::from_str::<Vec<T>>(text) {
                Ok(values) => Ok(values),
                Err(many_err) => serde_json::from_str::<T>(text)
                    .map(|value| vec![value])
                    .map_err(|_| StoreError::Decode(many_err.to_string())),
            }
        } else {
            serde_json::from_str::<T>(text)
                .map(|value| vec![value])
                .map_err(|e| StoreError::Decode(e.to_string()))
        }
    }
}
