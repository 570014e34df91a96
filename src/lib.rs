//! # filestore
//!
//! A lightweight persistence layer for small collections of typed records:
//! - One file holds one whole collection
//! - Pluggable text formats (JSON array, JSON Lines)
//! - Whole-file read, append, replace and delete
//! - Strict or create-if-missing open policy
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     FileStore<T, S>                          │
//! │        read / write_one / replace_all / delete_all           │
//! └──────────────┬──────────────────────────────┬───────────────┘
//!                │                              │
//!                ▼                              ▼
//!       ┌─────────────────┐            ┌─────────────────┐
//!       │  Serializer<T>  │            │   std::fs::File │
//!       │  (pure, no I/O) │            │ open/trunc/write│
//!       └─────────────────┘            └─────────────────┘
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use filestore::{FileStore, JsonSerializer};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Task {
//!     title: String,
//!     done: bool,
//! }
//!
//! let store: FileStore<Task, _> = FileStore::new("tasks.json", JsonSerializer::new());
//! store.write_one(Task { title: "ship it".into(), done: false })?;
//! let tasks = store.read()?;
//! # Ok::<(), filestore::StoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod serializer;
pub mod traits;
pub mod store;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{StoreError, Result};
pub use config::{Config, OpenMode, SyncStrategy, WriteOrder};
pub use serializer::{JsonLinesSerializer, JsonSerializer, Serializer};
pub use traits::{RecordReader, RecordStore, RecordWriter};
pub use store::FileStore;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of filestore
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
