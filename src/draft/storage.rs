//! Key-value storage backends for drafts.
//!
//! The draft store talks to storage only through [`StoragePort`], so any
//! key-value backend can be plugged in or mocked.

use std::collections::HashMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use lazy_static::lazy_static;
use parking_lot::Mutex;
use regex::Regex;
use tempfile::NamedTempFile;

use crate::error::StorageError;

lazy_static! {
    static ref KEY_PATTERN: Regex = Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_.-]{0,127}$").unwrap();
}

/// Durable string key-value storage.
pub trait StoragePort: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite any previous value under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing an absent key succeeds.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Whether `key` is accepted by every backend.
pub fn is_valid_key(key: &str) -> bool {
    KEY_PATTERN.is_match(key)
}

fn check_key(key: &str) -> Result<(), StorageError> {
    if is_valid_key(key) {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

/// Process-local storage with an optional byte quota.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
    quota_bytes: Option<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject writes that would push the total stored bytes over `quota_bytes`.
    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            quota_bytes: Some(quota_bytes),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.lock().contains_key(key)
    }
}

impl StoragePort for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        check_key(key)?;
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        check_key(key)?;
        let mut entries = self.entries.lock();

        if let Some(quota) = self.quota_bytes {
            let others: usize = entries
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            let needed = key.len() + value.len();
            let available = quota.saturating_sub(others);
            if needed > available {
                return Err(StorageError::QuotaExceeded { needed, available });
            }
        }

        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        check_key(key)?;
        self.entries.lock().remove(key);
        Ok(())
    }
}

/// One file per key inside a directory.
///
/// Writes go to a temporary file in the same directory and are renamed
/// into place, so a reader never sees a half-written value.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Open (and create if needed) a storage directory.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, StorageError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        log::debug!("FILE_STORAGE_OPEN dir={}", dir.display());
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        check_key(key)?;
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl StoragePort for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        // The temp file is deleted on drop unless persisted.
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(value.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&path).map_err(|e| e.error)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_roundtrip_and_remove() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("trek-draft").unwrap(), None);
        storage.set("trek-draft", "{}").unwrap();
        storage.set("trek-draft", "{\"a\":1}").unwrap();
        assert_eq!(storage.get("trek-draft").unwrap().as_deref(), Some("{\"a\":1}"));
        storage.remove("trek-draft").unwrap();
        storage.remove("trek-draft").unwrap();
        assert!(storage.is_empty());
    }

    #[test]
    fn test_memory_quota() {
        let storage = MemoryStorage::with_quota(20);
        storage.set("k", "0123456789").unwrap();
        // replacing the same key only counts the new value
        storage.set("k", "0123456789abcdef").unwrap();
        let err = storage.set("other", "0123456789").unwrap_err();
        assert!(matches!(err, StorageError::QuotaExceeded { .. }));
        assert!(!storage.contains("other"));
    }

    #[test]
    fn test_invalid_keys_rejected() {
        let storage = MemoryStorage::new();
        for key in ["", "../escape", "a/b", " spaced"] {
            assert!(matches!(storage.set(key, "x"), Err(StorageError::InvalidKey(_))));
        }
    }

    #[test]
    fn test_file_storage_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::open(dir.path().join("drafts")).unwrap();
        assert_eq!(storage.get("trek-draft").unwrap(), None);

        storage.set("trek-draft", "{\"step\":\"route\"}").unwrap();
        assert_eq!(
            storage.get("trek-draft").unwrap().as_deref(),
            Some("{\"step\":\"route\"}")
        );
        assert!(storage.dir().join("trek-draft.json").exists());

        storage.remove("trek-draft").unwrap();
        storage.remove("trek-draft").unwrap();
        assert_eq!(storage.get("trek-draft").unwrap(), None);
    }

    #[test]
    fn test_failed_file_write_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::open(dir.path()).unwrap();
        // a directory where the value file should go makes the rename fail
        fs::create_dir(storage.dir().join("trek-draft.json")).unwrap();

        assert!(matches!(storage.set("trek-draft", "{}"), Err(StorageError::Io(_))));

        let entries: Vec<_> = fs::read_dir(storage.dir())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("trek-draft.json")]);
    }

    #[test]
    fn test_valid_key_helper() {
        assert!(is_valid_key("trek-draft"));
        assert!(!is_valid_key("trek draft"));
    }
}
