//! # Storage Adapters
//!
//! A thin string-valued key-value interface the actor persists through, with two
//! implementations:
//!
//! - [`FileStorage`]: durable medium, one `<key>.json` file per key in a directory.
//! - [`MemoryStorage`]: in-memory medium for tests, with failure injection.
//!
//! The actor wraps every call and degrades gracefully, so adapters simply report
//! failures as [`StorageError`] and never panic.

use crate::error::StorageError;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use tracing::debug;

/// String-valued key-value persistence.
pub trait StorageAdapter: Send + Sync {
    /// Reads the value stored under `key`, `None` when absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Directory-backed storage.
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Opens (and creates if needed) the storage directory.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(StorageError::Unavailable(format!("invalid key: {key:?}")));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

impl StorageAdapter for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, value)?;
        std::fs::rename(&tmp, &path)?;
        debug!(key, bytes = value.len(), "Stored");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory storage for tests.
///
/// Values are copied in on `set` and copied out on `get`/`snapshot`, so nothing
/// outside the adapter can alias the stored data.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a storage pre-populated with one entry.
    pub fn seeded(key: impl Into<String>, value: impl Into<String>) -> Self {
        let storage = Self::new();
        if let Ok(mut entries) = storage.entries.lock() {
            entries.insert(key.into(), value.into());
        }
        storage
    }

    /// Returns a copy of every stored entry.
    pub fn snapshot(&self) -> HashMap<String, String> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    /// Makes every subsequent `get` fail.
    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Makes every subsequent `set`/`remove` fail.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, StorageError> {
        self.entries
            .lock()
            .map_err(|_| StorageError::Unavailable("memory storage poisoned".to_string()))
    }
}

impl StorageAdapter for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable("reads disabled".to_string()));
        }
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable("quota exceeded".to_string()));
        }
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable("writes disabled".to_string()));
        }
        self.lock()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_storage_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::open(dir.path().join("data")).unwrap();

        assert_eq!(storage.get("orders").unwrap(), None);

        storage.set("orders", "[1,2,3]").unwrap();
        assert_eq!(storage.get("orders").unwrap().as_deref(), Some("[1,2,3]"));
        assert!(dir.path().join("data/orders.json").exists());

        storage.set("orders", "[]").unwrap();
        assert_eq!(storage.get("orders").unwrap().as_deref(), Some("[]"));

        storage.remove("orders").unwrap();
        assert_eq!(storage.get("orders").unwrap(), None);
        // Removing twice is fine.
        storage.remove("orders").unwrap();
    }

    #[test]
    fn test_file_storage_rejects_path_keys() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::open(dir.path()).unwrap();
        assert!(matches!(
            storage.set("../escape", "x"),
            Err(StorageError::Unavailable(_))
        ));
    }

    #[test]
    fn test_memory_storage_copies_values() {
        let storage = MemoryStorage::seeded("k", "v1");
        let mut copy = storage.snapshot();
        copy.insert("k".to_string(), "tampered".to_string());
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("v1"));
    }

    #[test]
    fn test_memory_storage_failure_injection() {
        let storage = MemoryStorage::new();
        storage.fail_writes(true);
        assert!(storage.set("k", "v").is_err());
        storage.fail_writes(false);
        storage.set("k", "v").unwrap();

        storage.fail_reads(true);
        assert!(storage.get("k").is_err());
        storage.fail_reads(false);
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("v"));
    }
}
