//! Key-value persistence adapter.
//!
//! Wraps a string-keyed store with `localStorage`-like semantics: reads
//! that fail for any reason degrade to absence, writes may fail loudly.
//! The store persists each collection as a JSON array under a fixed key.

mod file;
mod memory;

pub use file::FileKv;
pub use memory::MemoryKv;

use std::path::PathBuf;
use thiserror::Error;

/// Storage key for the persisted watch list.
pub const WATCH_LIST_KEY: &str = "streamlist_items";

/// Storage key for the persisted cart.
pub const CART_KEY: &str = "eztech_cart_v1";

/// Errors that can occur when writing to the store.
///
/// Reads never produce errors; unreadable values are treated as absent.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to write key '{key}' to '{path}': {source}")]
    WriteError {
        key: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize value for key '{key}': {source}")]
    SerializeError {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Minimal key-value contract the state store persists through.
///
/// `get` swallows all failure modes into `None`; corrupt or unreadable
/// content is never fatal. `set` propagates write failures.
pub trait KvStore {
    /// Fetch the stored string for `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}
