//! Byte-oriented key-value stores
//!
//! The ledger is persisted as one record under a fixed key. [`FileStore`]
//! keeps each key in its own JSON file; [`MemoryStore`] keeps everything in
//! memory and can be told to reject writes.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::{LedgerError, LedgerResult};

use super::file_io::{read_bytes, write_atomic};

/// Minimal durable store the persistence layer writes through
pub trait KeyValueStore {
    /// Fetch the bytes stored under `key`, if any
    fn get(&self, key: &str) -> LedgerResult<Option<Vec<u8>>>;

    /// Replace the bytes stored under `key`. A failed write must leave the
    /// previous value in place.
    fn put(&mut self, key: &str, value: &[u8]) -> LedgerResult<()>;
}

/// One `<key>.json` file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }

    /// Path of the file backing `key`
    pub fn path_for(&self, key: &str) -> LedgerResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(LedgerError::Storage(format!("Invalid storage key: {:?}", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> LedgerResult<Option<Vec<u8>>> {
        read_bytes(self.path_for(key)?)
    }

    fn put(&mut self, key: &str, value: &[u8]) -> LedgerResult<()> {
        write_atomic(self.path_for(key)?, value)
    }
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, Vec<u8>>,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `put` fail, leaving stored values untouched
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Seed a raw value, bypassing `fail_writes`
    pub fn insert_raw(&mut self, key: &str, value: impl Into<Vec<u8>>) {
        self.entries.insert(key.to_string(), value.into());
    }

    pub fn raw(&self, key: &str) -> Option<&[u8]> {
        self.entries.get(key).map(Vec::as_slice)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> LedgerResult<Option<Vec<u8>>> {
        Ok(self.entries.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &[u8]) -> LedgerResult<()> {
        if self.fail_writes {
            return Err(LedgerError::Storage(format!(
                "Write rejected for key {:?}",
                key
            )));
        }
        self.entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }
}
