//! Record store capabilities
//!
//! Reading and writing are separate traits so code that only needs to load
//! a collection can take `impl RecordReader<T>` and stay honest about it.

use crate::error::Result;

/// Loads the full persisted collection
pub trait RecordReader<T> {
    /// Read every record, in file order
    fn read(&self) -> Result<Vec<T>>;
}

/// Whole-collection mutations
pub trait RecordWriter<T> {
    /// Append one record after the existing ones
    fn write_one(&self, value: T) -> Result<()>;

    /// Replace the persisted collection with `values`
    fn replace_all(&self, values: &[T]) -> Result<()>;

    /// Remove every record, leaving an empty file
    fn delete_all(&self) -> Result<()>;
}

/// Both capabilities
pub trait RecordStore<T>: RecordReader<T> + RecordWriter<T> {}

impl<T, S> RecordStore<T> for S where S: RecordReader<T> + RecordWriter<T> {}
