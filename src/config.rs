//! Configuration for filestore
//!
//! Per-store options with sensible defaults. The file path itself is not
//! part of the config; it is handed to [`FileStore`](crate::FileStore)
//! alongside the serializer.

/// Options controlling how a [`FileStore`](crate::FileStore) touches its file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Open Configuration
    // -------------------------------------------------------------------------
    /// What to do when the backing file does not exist
    pub open_mode: OpenMode,

    // -------------------------------------------------------------------------
    // Write Configuration
    // -------------------------------------------------------------------------
    /// Whether encoding happens before or after the file is truncated
    pub write_order: WriteOrder,

    /// Sync strategy: whether to fsync after each rewrite
    pub sync_strategy: SyncStrategy,
}

/// File-open policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpenMode {
    /// Fail with a not-found I/O error if the file is missing
    Strict,

    /// Create an empty file if it is missing, then proceed
    #[default]
    CreateIfMissing,
}

/// Ordering of truncate and encode inside `replace_all`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteOrder {
    /// Encode the whole collection in memory first, then open, truncate and
    /// write. An encode failure leaves the file untouched.
    #[default]
    EncodeFirst,

    /// Open and truncate, then encode and write. An encode failure leaves
    /// the file empty.
    TruncateFirst,
}

/// Durability of rewrites
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncStrategy {
    /// Leave flushing to the OS page cache
    #[default]
    OsBuffered,

    /// fsync after every truncate/rewrite (safest, slowest)
    EveryWrite,
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the open mode
    pub fn open_mode(mut self, mode: OpenMode) -> Self {
        self.config.open_mode = mode;
        self
    }

    /// Shorthand for `open_mode(OpenMode::Strict)`
    pub fn strict(self) -> Self {
        self.open_mode(OpenMode::Strict)
    }

    /// Set the truncate/encode ordering
    pub fn write_order(mut self, order: WriteOrder) -> Self {
        self.config.write_order = order;
        self
    }

    /// Set the sync strategy
    pub fn sync_strategy(mut self, strategy: SyncStrategy) -> Self {
        self.config.sync_strategy = strategy;
        self
    }

    /// Finish building the config
    pub fn build(self) -> Config {
        self.config
    }
}
