//! Persistence of the settings and database documents.
//!
//! Both documents live in memory and are written through to a
//! [`KeyValueStore`] as whole JSON blobs after every change. Persistence is
//! best-effort: a failed read starts from defaults, a failed write is logged
//! and the in-memory state stays authoritative for the session.

mod document;
mod error;
mod kv;

pub use document::*;
pub use error::*;
pub use kv::*;

use crate::config::StoreConfig;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Open the key-value store described by `config`.
///
/// Falls back to a [`MemoryStore`] when the file store cannot be opened.
pub fn open_store(config: &StoreConfig) -> Arc<dyn KeyValueStore> {
    if config.in_memory {
        return Arc::new(MemoryStore::new());
    }
    match FileStore::open(&config.path) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            tracing::warn!(
                path = %config.path.display(),
                error = %e,
                "Store unavailable, keeping state in memory only"
            );
            Arc::new(MemoryStore::new())
        }
    }
}

/// In-memory documents with write-through persistence.
pub struct DashboardStore {
    kv: Arc<dyn KeyValueStore>,
    database: Mutex<Database>,
    settings: Mutex<Settings>,
}

impl DashboardStore {
    /// Load both documents, using `default_settings` when none are stored.
    pub fn open(kv: Arc<dyn KeyValueStore>, default_settings: Settings) -> Self {
        let database = load_document(kv.as_ref(), DATABASE_KEY).unwrap_or_default();
        let settings = load_document(kv.as_ref(), SETTINGS_KEY).unwrap_or(default_settings);

        Self {
            kv,
            database: Mutex::new(database),
            settings: Mutex::new(settings),
        }
    }

    /// Read from the database document.
    pub fn read<R>(&self, f: impl FnOnce(&Database) -> R) -> R {
        f(&lock(&self.database))
    }

    /// Mutate the database document and persist it.
    ///
    /// The lock is held while persisting so writes reach the store in the
    /// order they were applied.
    pub fn update<R>(&self, f: impl FnOnce(&mut Database) -> R) -> R {
        let mut database = lock(&self.database);
        let result = f(&mut database);
        persist_document(self.kv.as_ref(), DATABASE_KEY, &*database);
        result
    }

    pub fn settings(&self) -> Settings {
        lock(&self.settings).clone()
    }

    /// Mutate the settings document and persist it.
    pub fn update_settings<R>(&self, f: impl FnOnce(&mut Settings) -> R) -> R {
        let mut settings = lock(&self.settings);
        let result = f(&mut settings);
        persist_document(self.kv.as_ref(), SETTINGS_KEY, &*settings);
        result
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn load_document<T: DeserializeOwned>(kv: &dyn KeyValueStore, key: &str) -> Option<T> {
    match kv.get(key) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(doc) => Some(doc),
            Err(e) => {
                tracing::warn!(key = key, error = %e, "Stored document is unreadable, starting fresh");
                None
            }
        },
        Ok(None) => None,
        Err(e) => {
            tracing::warn!(key = key, error = %e, "Failed to read stored document");
            None
        }
    }
}

fn persist_document<T: Serialize>(kv: &dyn KeyValueStore, key: &str, doc: &T) {
    let result = serde_json::to_string(doc)
        .map_err(|e| StoreError::Serialize {
            key: key.to_string(),
            message: e.to_string(),
        })
        .and_then(|raw| kv.set(key, &raw));

    if let Err(e) = result {
        tracing::warn!(key = key, error = %e, "Failed to persist document, continuing in memory");
    }
}
