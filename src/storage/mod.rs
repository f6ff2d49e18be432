//! Storage layer for the finance ledger
//!
//! Provides byte-oriented key-value stores (file-backed with atomic writes,
//! or in-memory) and the ledger persistence adapter on top of them.

pub mod file_io;
pub mod kv;
pub mod persistence;

pub use file_io::{read_bytes, write_atomic, write_json_atomic};
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use persistence::{LedgerPersistence, LEDGER_KEY};

use crate::config::paths::LedgerPaths;
use crate::error::LedgerError;

/// Open the file-backed persistence under the configured data directory
pub fn open_file_persistence(paths: &LedgerPaths) -> Result<LedgerPersistence<FileStore>, LedgerError> {
    paths.ensure_directories()?;
    Ok(LedgerPersistence::new(FileStore::new(paths.data_dir())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_file_persistence_creates_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let persistence = open_file_persistence(&paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert_eq!(persistence.store().dir(), &paths.data_dir());
        assert!(persistence.load().is_none());
    }
}
