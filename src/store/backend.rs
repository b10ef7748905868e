//! Durable key-value backends.
//!
//! A backend stores one string value per key and nothing else. The
//! filesystem implementation keeps one file per key under a data directory,
//! so every logical field has its own durable entry.

use crate::error::StoreError;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Synchronous string-keyed, string-valued storage.
pub trait StorageBackend {
    /// Returns the stored value for `key`, or `None` when absent or
    /// unreadable.
    fn read(&self, key: &str) -> Option<String>;

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// One file per key under a base directory.
#[derive(Debug)]
pub struct FileBackend {
    base_dir: PathBuf,
}

impl FileBackend {
    /// Creates a backend rooted at `base_dir`. Construction never fails; if
    /// the directory cannot be created, every write reports the failure and
    /// the layer above degrades to in-memory behavior.
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        if let Err(e) = fs::create_dir_all(&base_dir) {
            log::warn!("cannot create data directory {}: {}", base_dir.display(), e);
        }
        Self { base_dir }
    }

    pub fn base(&self) -> &Path {
        &self.base_dir
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        // Keys are application-defined constants; a sanitized copy keeps a
        // hostile key from escaping the data directory.
        let safe: String = key
            .chars()
            .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.base_dir.join(format!("{safe}.json"))
    }
}

impl StorageBackend for FileBackend {
    fn read(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.entry_path(key)).ok()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.base_dir).map_err(|source| StoreError::Io {
            key: key.to_string(),
            source,
        })?;
        fs::write(self.entry_path(key), value).map_err(|source| StoreError::Io {
            key: key.to_string(),
            source,
        })
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        let path = self.entry_path(key);
        if path.exists() {
            fs::remove_file(&path).map_err(|source| StoreError::Io {
                key: key.to_string(),
                source,
            })?;
        }
        Ok(())
    }
}

/// Pure in-memory backend for environments without durable storage.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: HashMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_backend_round_trips_entries() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = FileBackend::new(dir.path());
        backend.write("curriculum-aboutSummary", "\"hello\"").unwrap();
        assert_eq!(
            backend.read("curriculum-aboutSummary").as_deref(),
            Some("\"hello\"")
        );
        backend.remove("curriculum-aboutSummary").unwrap();
        assert_eq!(backend.read("curriculum-aboutSummary"), None);
    }

    #[test]
    fn file_backend_sanitizes_hostile_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = FileBackend::new(dir.path());
        backend.write("../escape", "\"x\"").unwrap();
        // The entry must land inside the base directory.
        assert!(backend.read("../escape").is_some());
        assert!(dir.path().join("___escape.json").exists());
    }

    #[test]
    fn memory_backend_is_isolated_per_instance() {
        let mut a = MemoryBackend::new();
        a.write("k", "1").unwrap();
        let b = MemoryBackend::new();
        assert_eq!(b.read("k"), None);
    }
}
