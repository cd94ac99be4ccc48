//! Key-value store collaborators.

use super::error::StoreError;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, RwLock};

/// String key-value storage holding the persisted documents.
///
/// Writes are unconditional overwrites; there are no transactions.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
    fn clear(&self) -> Result<(), StoreError>;
}

/// Volatile store, lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self.entries.read().map_err(|_| StoreError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.write().map_err(|_| StoreError::Poisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.write().map_err(|_| StoreError::Poisoned)?;
        entries.remove(key);
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        let mut entries = self.entries.write().map_err(|_| StoreError::Poisoned)?;
        entries.clear();
        Ok(())
    }
}

/// Store backed by a single JSON file mapping keys to strings.
///
/// The whole file is rewritten on every mutation.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
}

impl FileStore {
    /// Open the store, starting empty when the file does not exist yet.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let entries = if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|source| StoreError::Io {
                path: path.clone(),
                source,
            })?;
            if content.trim().is_empty() {
                HashMap::new()
            } else {
                serde_json::from_str(&content)
                    .map_err(|e| StoreError::Corrupt(path.clone(), e.to_string()))?
            }
        } else {
            HashMap::new()
        };

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, entries: &HashMap<String, String>) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(entries).map_err(|e| StoreError::Serialize {
            key: "*".to_string(),
            message: e.to_string(),
        })?;
        std::fs::write(&self.path, content).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self.entries.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().map_err(|_| StoreError::Poisoned)?;
        entries.insert(key.to_string(), value.to_string());
        self.flush(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().map_err(|_| StoreError::Poisoned)?;
        if entries.remove(key).is_some() {
            self.flush(&entries)?;
        }
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().map_err(|_| StoreError::Poisoned)?;
        entries.clear();
        self.flush(&entries)
    }
}
