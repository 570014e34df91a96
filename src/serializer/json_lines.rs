//! JSON Lines serializer
//!
//! One compact JSON document per line. Appending by hand with an editor or
//! `echo >>` keeps the file valid, unlike a JSON array.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Result, StoreError};

use super::Serializer;

/// Newline-delimited JSON encoding backed by `serde_json`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonLinesSerializer;

impl JsonLinesSerializer {
    pub fn new() -> Self {
        Self
    }
}

impl<T> Serializer<T> for JsonLinesSerializer
where
    T: Serialize + DeserializeOwned,
{
    fn serialize(&self, value: &T) -> Result<String> {
        let mut line = serde_json::to_string(value).map_err(|e| StoreError::Encode(e.to_string()))?;
        line.push('\n');
        Ok(line)
    }

    /// Empty collection encodes to the empty string
    fn serialize_many(&self, values: &[T]) -> Result<String> {
        let mut out = String::new();
        for value in values {
            out.push_str(&Serializer::<T>::serialize(self, value)?);
        }
        Ok(out)
    }

    /// Blank lines are skipped; errors report the 1-based line number
    fn deserialize(&self, text: &str) -> Result<Vec<T>> {
        let mut values = Vec::new();
        for (idx, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let value = serde_json::from_str(line)
                .map_err(|e| StoreError::Decode(format!("line {}: {}", idx + 1, e)))?;
            values.push(value);
        }
        Ok(values)
    }
}
