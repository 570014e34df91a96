//! File Store
//!
//! Whole-file record collection backed by a single path and a serializer.
//!
//! ## Responsibilities
//! - Open the backing file according to the configured [`OpenMode`]
//! - Read and decode the full collection
//! - Append by read-modify-rewrite
//! - Truncate and rewrite, or truncate only
//!
//! ## Concurrency
//! None. Each operation is one open -> act -> close cycle and nothing is
//! locked. Two stores (or processes) appending to the same path can race,
//! and the later rewrite wins:
//!
//! ```text
//!  store A: read [x]          ──────────────── rewrite [x, a]
//!  store B:        read [x] ── rewrite [x, b]
//!                                              file: [x, a]   (b is lost)
//! ```

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{Read, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use tracing::{debug, trace, warn};

use crate::config::{Config, OpenMode, SyncStrategy, WriteOrder};
use crate::error::{Result, StoreError};
use crate::serializer::Serializer;
use crate::traits::{RecordReader, RecordWriter};

/// A collection of `T` persisted to one file through serializer `S`
///
/// ## Ownership:
/// - `path`, `serializer` and `config` are owned and fixed at construction
/// - No file handle outlives a single method call
pub struct FileStore<T, S> {
    /// Backing file
    path: PathBuf,

    /// Text encoding for the collection
    serializer: S,

    /// Open/write behavior
    config: Config,

    _record: PhantomData<fn() -> T>,
}

impl<T, S> FileStore<T, S> {
    /// Create a store with the default config (create-if-missing, encode-first)
    ///
    /// Does not touch the filesystem.
    pub fn new(path: impl Into<PathBuf>, serializer: S) -> Self {
        Self::with_config(path, serializer, Config::default())
    }

    /// Create a store with an explicit config
    pub fn with_config(path: impl Into<PathBuf>, serializer: S, config: Config) -> Self {
        Self {
            path: path.into(),
            serializer,
            config,
            _record: PhantomData,
        }
    }

    /// Get the backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the store's open/write options
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the serializer used for the collection
    pub fn serializer(&self) -> &S {
        &self.serializer
    }
}

impl<T, S> FileStore<T, S>
where
    S: Serializer<T>,
{
    /// Read and decode the whole collection
    ///
    /// An empty file yields an empty `Vec`. Bytes that are not UTF-8 are a
    /// decode failure, not an I/O one.
    pub fn read(&self) -> Result<Vec<T>> {
        let bytes = {
            let mut file = self.open_file()?;
            let mut bytes = Vec::new();
            file.read_to_end(&mut bytes)?;
            bytes
        };
        trace!(path = %self.path.display(), bytes = bytes.len(), "read file");

        let text = String::from_utf8(bytes)
            .map_err(|e| StoreError::Decode(format!("file is not valid UTF-8: {}", e)))?;
        let values = self.serializer.deserialize(&text)?;

        debug!(path = %self.path.display(), records = values.len(), "read collection");
        Ok(values)
    }

    /// Append one record: read everything, push, rewrite everything
    ///
    /// Not isolated: a concurrent writer between the read and the rewrite
    /// loses its update. If the read fails the file is left unchanged.
    pub fn write_one(&self, value: T) -> Result<()> {
        let mut values = self.read()?;
        values.push(value);
        self.replace_all(&values)
    }

    /// Truncate the file and write `values` as the new collection
    ///
    /// With [`WriteOrder::EncodeFirst`] an encode error is returned before
    /// the file is opened. With [`WriteOrder::TruncateFirst`] the file has
    /// already been emptied when the encode error is returned.
    pub fn replace_all(&self, values: &[T]) -> Result<()> {
        let (mut file, encoded) = match self.config.write_order {
            WriteOrder::EncodeFirst => {
                let encoded = self.serializer.serialize_many(values)?;
                let file = self.open_file()?;
                file.set_len(0)?;
                (file, encoded)
            }
            WriteOrder::TruncateFirst => {
                let file = self.open_file()?;
                file.set_len(0)?;
                match self.serializer.serialize_many(values) {
                    Ok(encoded) => (file, encoded),
                    Err(e) => {
                        warn!(path = %self.path.display(), error = %e, "encode failed after truncate, file left empty");
                        if let Err(sync_err) = self.sync(&file) {
                            warn!(path = %self.path.display(), error = %sync_err, "sync after failed encode failed");
                        }
                        return Err(e);
                    }
                }
            }
        };

        file.write_all(encoded.as_bytes())?;
        self.sync(&file)?;

        debug!(
            path = %self.path.display(),
            records = values.len(),
            bytes = encoded.len(),
            "replaced collection"
        );
        Ok(())
    }

    /// Truncate the file to zero length
    ///
    /// In strict mode a missing file is an error; otherwise it is created.
    pub fn delete_all(&self) -> Result<()> {
        let file = self.open_file()?;
        file.set_len(0)?;
        self.sync(&file)?;

        debug!(path = %self.path.display(), "deleted collection");
        Ok(())
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Open read/write per the configured open mode
    fn open_file(&self) -> Result<File> {
        let mut options = OpenOptions::new();
        options.read(true).write(true);
        if self.config.open_mode == OpenMode::CreateIfMissing {
            options.create(true);
        }

        options.open(&self.path).map_err(|e| {
            debug!(path = %self.path.display(), mode = ?self.config.open_mode, error = %e, "open failed");
            StoreError::Io(e)
        })
    }

    fn sync(&self, file: &File) -> Result<()> {
        if self.config.sync_strategy == SyncStrategy::EveryWrite {
            file.sync_all()?;
        }
        Ok(())
    }
}

impl<T, S> RecordReader<T> for FileStore<T, S>
where
    S: Serializer<T>,
{
    fn read(&self) -> Result<Vec<T>> {
        FileStore::read(self)
    }
}

impl<T, S> RecordWriter<T> for FileStore<T, S>
where
    S: Serializer<T>,
{
    fn write_one(&self, value: T) -> Result<()> {
        FileStore::write_one(self, value)
    }

    fn replace_all(&self, values: &[T]) -> Result<()> {
        FileStore::replace_all(self, values)
    }

    fn delete_all(&self) -> Result<()> {
        FileStore::delete_all(self)
    }
}

impl<T, S: fmt::Debug> fmt::Debug for FileStore<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileStore")
            .field("path", &self.path)
            .field("serializer", &self.serializer)
            .field("config", &self.config)
            .finish()
    }
}
