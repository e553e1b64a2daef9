//! Key-value blob stores
//!
//! A blob store maps string keys to opaque text values, the way a browser's
//! local storage does. `FileBlobStore` keeps one file per key on disk;
//! `MemoryBlobStore` keeps everything in a map.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ExpenseError, ExpenseResult};

use super::file_io::{read_text, write_text_atomic};

/// Storage capability for whole-value text blobs
pub trait BlobStore {
    /// Fetch the value stored under `key`, if any
    fn get(&self, key: &str) -> ExpenseResult<Option<String>>;

    /// Replace the value stored under `key`
    fn set(&mut self, key: &str, value: &str) -> ExpenseResult<()>;
}

/// Blob store backed by `<dir>/<key>.json` files
#[derive(Debug, Clone)]
pub struct FileBlobStore {
    dir: PathBuf,
}

impl FileBlobStore {
    /// Create a store rooted at `dir` (created lazily on first write)
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the blob files
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `key`
    pub fn path_for(&self, key: &str) -> ExpenseResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(ExpenseError::Storage(format!("Invalid storage key: '{}'", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl BlobStore for FileBlobStore {
    fn get(&self, key: &str) -> ExpenseResult<Option<String>> {
        let path = self.path_for(key)?;
        debug!(path = %path.display(), "Reading blob");
        read_text(&path)
    }

    fn set(&mut self, key: &str, value: &str) -> ExpenseResult<()> {
        let path = self.path_for(key)?;
        debug!(path = %path.display(), bytes = value.len(), "Writing blob");
        write_text_atomic(&path, value)
    }
}

/// In-memory blob store
#[derive(Debug, Clone, Default)]
pub struct MemoryBlobStore {
    entries: HashMap<String, String>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with a single entry
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.into(), value.into());
        Self { entries }
    }
}

impl BlobStore for MemoryBlobStore {
    fn get(&self, key: &str) -> ExpenseResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> ExpenseResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
