//! Status source registry.
//!
//! Holds the ordered catalog of status sources: configured ones first, then
//! custom sources added at runtime. The catalog is mirrored into the
//! database document (`statusPages`, `customServices`) so enabled flags and
//! custom entries survive restarts.

mod error;
#[cfg(test)]
mod tests;

pub use error::*;

use crate::config::StatusSourceConfig;
use crate::store::DashboardStore;
use std::sync::{Arc, PoisonError, RwLock};

/// The catalog of status sources.
///
/// # Examples
///
/// ```
/// use statuswatch::config::StatusSourceConfig;
/// use statuswatch::registry::SourceRegistry;
/// use statuswatch::store::{DashboardStore, MemoryStore, Settings};
/// use std::sync::Arc;
///
/// let store = Arc::new(DashboardStore::open(Arc::new(MemoryStore::new()), Settings::default()));
/// let source = StatusSourceConfig {
///     id: "payments".to_string(),
///     name: "Payments API".to_string(),
///     api: "https://status.payments.example/api/status.json".to_string(),
///     page: String::new(),
///     enabled: true,
///     env: "prod".to_string(),
///     category: None,
/// };
///
/// let registry = SourceRegistry::load(vec![source], store);
/// assert_eq!(registry.source_count(), 1);
/// assert!(registry.get_source("payments").is_some());
/// ```
pub struct SourceRegistry {
    sources: RwLock<Vec<StatusSourceConfig>>,
    store: Arc<DashboardStore>,
}

impl SourceRegistry {
    /// Build the catalog from configured sources and the stored database.
    ///
    /// Enabled flags recorded in `statusPages` override the configured ones;
    /// stored custom services are appended unless their id is already taken.
    pub fn load(configured: Vec<StatusSourceConfig>, store: Arc<DashboardStore>) -> Self {
        let (stored_pages, custom) =
            store.read(|db| (db.status_pages.clone(), db.custom_services.clone()));

        let mut sources = configured;
        for source in sources.iter_mut() {
            if let Some(stored) = stored_pages.iter().find(|s| s.id == source.id) {
                source.enabled = stored.enabled;
            }
        }
        for custom_source in custom {
            if sources.iter().any(|s| s.id == custom_source.id) {
                tracing::warn!(source_id = %custom_source.id, "Custom source shadowed by configured source");
                continue;
            }
            sources.push(custom_source);
        }

        tracing::info!(sources = sources.len(), "Loaded status sources");

        let registry = Self {
            sources: RwLock::new(sources),
            store,
        };
        registry.persist_catalog();
        registry
    }

    /// Get a source by ID.
    pub fn get_source(&self, id: &str) -> Option<StatusSourceConfig> {
        self.read().iter().find(|s| s.id == id).cloned()
    }

    /// All sources in catalog order.
    pub fn get_all_sources(&self) -> Vec<StatusSourceConfig> {
        self.read().clone()
    }

    /// Enabled sources in catalog order. These are the tracked widgets.
    pub fn get_enabled_sources(&self) -> Vec<StatusSourceConfig> {
        self.read().iter().filter(|s| s.enabled).cloned().collect()
    }

    pub fn source_count(&self) -> usize {
        self.read().len()
    }

    /// Flip a source's `enabled` flag and persist. Returns the updated source.
    pub fn toggle_source(&self, id: &str) -> Result<StatusSourceConfig, RegistryError> {
        let updated = {
            let mut sources = self.write();
            let source = sources
                .iter_mut()
                .find(|s| s.id == id)
                .ok_or_else(|| RegistryError::SourceNotFound(id.to_string()))?;
            source.enabled = !source.enabled;
            source.clone()
        };

        tracing::info!(source_id = id, enabled = updated.enabled, "Source toggled");
        self.persist_catalog();
        Ok(updated)
    }

    /// Add a custom source at the end of the catalog.
    pub fn add_custom_source(&self, source: StatusSourceConfig) -> Result<(), RegistryError> {
        if source.id.is_empty() || source.name.is_empty() || source.api.is_empty() {
            return Err(RegistryError::InvalidSource(
                "id, name and api are required".to_string(),
            ));
        }

        {
            let mut sources = self.write();
            if sources.iter().any(|s| s.id == source.id) {
                return Err(RegistryError::DuplicateSource(source.id));
            }
            sources.push(source.clone());
        }

        tracing::info!(source_id = %source.id, name = %source.name, "Custom source added");
        self.store.update(|db| db.custom_services.push(source));
        self.persist_catalog();
        Ok(())
    }

    /// Mirror the catalog into the database document.
    fn persist_catalog(&self) {
        let sources = self.get_all_sources();
        self.store.update(|db| {
            for custom in db.custom_services.iter_mut() {
                if let Some(current) = sources.iter().find(|s| s.id == custom.id) {
                    custom.enabled = current.enabled;
                }
            }
            db.status_pages = sources;
        });
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Vec<StatusSourceConfig>> {
        self.sources.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Vec<StatusSourceConfig>> {
        self.sources.write().unwrap_or_else(PoisonError::into_inner)
    }
}
