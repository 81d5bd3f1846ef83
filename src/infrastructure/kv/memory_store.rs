// marklet/src/infrastructure/kv/memory_store.rs
use crate::domain::error::DomainResult;
use crate::domain::repositories::kv_store::KeyValueStore;
use crate::infrastructure::error::InfrastructureError;
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory key-value store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct InMemoryKeyValueStore {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a single entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        let mut entries = store.entries.write().expect("fresh lock cannot be poisoned");
        entries.insert(key.to_string(), value.to_string());
        drop(entries);
        store
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn load(&self, key: &str) -> DomainResult<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|e| InfrastructureError::Store(format!("Store lock poisoned: {}", e)))?;
        Ok(entries.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> DomainResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| InfrastructureError::Store(format!("Store lock poisoned: {}", e)))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
