//! Serializer Module
//!
//! Pure conversion between records and text. No I/O happens here.
//!
//! ## Responsibilities
//! - Encode one record, or a whole collection, to text
//! - Decode persisted text back into a collection
//! - Treat zero-length input as the empty collection
//!
//! ## Formats
//! ```text
//! JsonSerializer       [{"Name":"David","Age":40},{"Name":"Eve","Age":22}]
//!
//! JsonLinesSerializer  {"Name":"David","Age":40}\n
//!                      {"Name":"Eve","Age":22}\n
//! ```

mod json;
mod json_lines;

pub use json::JsonSerializer;
pub use json_lines::JsonLinesSerializer;

use crate::error::Result;

/// Converts between values of `T` and a textual encoding.
///
/// Implementations must satisfy the round-trip contract:
/// `deserialize(serialize_many(v)?)? == v` for every collection `v`, and
/// `deserialize("")` must return an empty collection rather than an error.
pub trait Serializer<T> {
    /// Encode a single value.
    ///
    /// The output decodes through [`deserialize`](Serializer::deserialize)
    /// as a one-element collection, except where a format documents that a
    /// bare value is ambiguous with a collection (see [`JsonSerializer`]).
    fn serialize(&self, value: &T) -> Result<String>;

    /// Encode a whole collection as one text block. This is the persisted form.
    fn serialize_many(&self, values: &[T]) -> Result<String>;

    /// Decode text produced by `serialize_many` (or empty text).
    fn deserialize(&self, text: &str) -> Result<Vec<T>>;
}

impl<T, S> Serializer<T> for &S
where
    S: Serializer<T> + ?Sized,
{
    fn serialize(&self, value: &T) -> Result<String> {
        (**self).serialize(value)
    }

    fn serialize_many(&self, values: &[T]) -> Result<String> {
        (**self).serialize_many(values)
    }

    fn deserialize(&self, text: &str) -> Result<Vec<T>> {
        (**self).deserialize(text)
    }
}
