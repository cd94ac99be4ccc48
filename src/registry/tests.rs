//! Unit tests for the source registry.

use super::*;
use crate::store::{KeyValueStore, MemoryStore, Settings};

fn make_source(id: &str, enabled: bool) -> StatusSourceConfig {
    StatusSourceConfig {
        id: id.to_string(),
        name: format!("Source {}", id),
        api: format!("https://{}.example/status", id),
        page: format!("https://{}.example", id),
        enabled,
        env: "prod".to_string(),
        category: None,
    }
}

fn make_store(kv: Arc<dyn KeyValueStore>) -> Arc<DashboardStore> {
    Arc::new(DashboardStore::open(kv, Settings::default()))
}

#[test]
fn test_load_keeps_config_order() {
    let store = make_store(Arc::new(MemoryStore::new()));
    let registry = SourceRegistry::load(
        vec![make_source("b", true), make_source("a", true)],
        store,
    );
    let ids: Vec<_> = registry
        .get_all_sources()
        .into_iter()
        .map(|s| s.id)
        .collect();
    assert_eq!(ids, vec!["b", "a"]);
}

#[test]
fn test_enabled_sources_filter() {
    let store = make_store(Arc::new(MemoryStore::new()));
    let registry = SourceRegistry::load(
        vec![make_source("a", true), make_source("b", false)],
        store,
    );
    assert_eq!(registry.source_count(), 2);
    assert_eq!(registry.get_enabled_sources().len(), 1);
}

#[test]
fn test_toggle_source() {
    let store = make_store(Arc::new(MemoryStore::new()));
    let registry = SourceRegistry::load(vec![make_source("a", true)], store.clone());

    let updated = registry.toggle_source("a").unwrap();
    assert!(!updated.enabled);
    assert!(registry.get_enabled_sources().is_empty());
    assert!(!store.read(|db| db.status_pages[0].enabled));
}

#[test]
fn test_toggle_unknown_source() {
    let store = make_store(Arc::new(MemoryStore::new()));
    let registry = SourceRegistry::load(vec![], store);
    assert!(matches!(
        registry.toggle_source("nope"),
        Err(RegistryError::SourceNotFound(_))
    ));
}

#[test]
fn test_enabled_flag_survives_reload() {
    let kv: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    {
        let registry = SourceRegistry::load(vec![make_source("a", true)], make_store(kv.clone()));
        registry.toggle_source("a").unwrap();
    }

    let registry = SourceRegistry::load(vec![make_source("a", true)], make_store(kv));
    assert!(!registry.get_source("a").unwrap().enabled);
}

#[test]
fn test_custom_source_survives_reload() {
    let kv: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    {
        let registry = SourceRegistry::load(vec![make_source("a", true)], make_store(kv.clone()));
        registry.add_custom_source(make_source("custom", true)).unwrap();
        registry.toggle_source("custom").unwrap();
    }

    let registry = SourceRegistry::load(vec![make_source("a", true)], make_store(kv));
    let custom = registry.get_source("custom").unwrap();
    assert!(!custom.enabled);
    assert_eq!(registry.get_all_sources().last().unwrap().id, "custom");
}

#[test]
fn test_add_duplicate_source() {
    let store = make_store(Arc::new(MemoryStore::new()));
    let registry = SourceRegistry::load(vec![make_source("a", true)], store);
    assert!(matches!(
        registry.add_custom_source(make_source("a", true)),
        Err(RegistryError::DuplicateSource(_))
    ));
}

#[test]
fn test_add_invalid_source() {
    let store = make_store(Arc::new(MemoryStore::new()));
    let registry = SourceRegistry::load(vec![], store);
    let mut source = make_source("a", true);
    source.api = String::new();
    assert!(matches!(
        registry.add_custom_source(source),
        Err(RegistryError::InvalidSource(_))
    ));
}

#[test]
fn test_configured_source_shadows_custom() {
    let kv: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    {
        let registry = SourceRegistry::load(vec![], make_store(kv.clone()));
        registry.add_custom_source(make_source("a", true)).unwrap();
    }

    let mut configured = make_source("a", true);
    configured.name = "Configured".to_string();
    let registry = SourceRegistry::load(vec![configured], make_store(kv));
    assert_eq!(registry.source_count(), 1);
    assert_eq!(registry.get_source("a").unwrap().name, "Configured");
}
