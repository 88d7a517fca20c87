//! File-backed key-value store.
//!
//! Each key maps to one file inside a data directory, standing in for
//! browser `localStorage`. Reads degrade to `None` on any failure; writes
//! return `StorageError`.

use std::fs;
use std::path::{Path, PathBuf};

use super::{KvStore, StorageError};

/// One-file-per-key store rooted at a data directory.
#[derive(Debug, Clone)]
pub struct FileKv {
    root: PathBuf,
}

impl FileKv {
    /// Create a store rooted at `root`. The directory is created lazily
    /// on first write, not here.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Default data directory: `<data_dir>/streamlist/`.
    ///
    /// Falls back to the current directory if the platform data dir is
    /// unavailable.
    pub fn default_root() -> PathBuf {
        let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        data_dir.join("streamlist")
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl KvStore for FileKv {
    fn get(&self, key: &str) -> Option<String> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(content) => Some(content),
            Err(err) => {
                if err.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!(key, error = %err, "unreadable stored value, treating as absent");
                }
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| StorageError::WriteError {
                key: key.to_string(),
                path: path.clone(),
                source: e,
            })?;
        }
        fs::write(&path, value).map_err(|e| StorageError::WriteError {
            key: key.to_string(),
            path,
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let kv = FileKv::new(dir.path());
        assert_eq!(kv.get("streamlist_items"), None);
    }

    #[test]
    fn set_then_get_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut kv = FileKv::new(dir.path().join("nested"));
        kv.set("eztech_cart_v1", "[]").unwrap();
        assert_eq!(kv.get("eztech_cart_v1").as_deref(), Some("[]"));
    }
}
