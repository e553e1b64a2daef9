//! Storage layer for the expense tracker
//!
//! Provides key-value blob stores (JSON files with atomic writes, or memory)
//! and the repository that persists the expense list through them.

pub mod blob;
pub mod expenses;
pub mod file_io;

pub use blob::{BlobStore, FileBlobStore, MemoryBlobStore};
pub use expenses::{ExpenseRepository, EXPENSES_KEY};
pub use file_io::{read_json, read_text, write_json_atomic, write_text_atomic};

use crate::config::paths::ExpensePaths;
use crate::error::ExpenseResult;

/// Open the on-disk expense repository for the configured data directory
pub fn open_file_repository(paths: &ExpensePaths) -> ExpenseResult<ExpenseRepository<FileBlobStore>> {
    paths.ensure_directories()?;
    Ok(ExpenseRepository::new(FileBlobStore::new(paths.data_dir())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_file_repository_creates_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let repo = open_file_repository(&paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert_eq!(repo.store().dir(), temp_dir.path().join("data"));
        assert!(repo.load().is_none());
    }
}
