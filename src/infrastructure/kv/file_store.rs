// marklet/src/infrastructure/kv/file_store.rs
use crate::domain::error::DomainResult;
use crate::domain::repositories::kv_store::KeyValueStore;
use crate::infrastructure::error::InfrastructureError;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::{debug, instrument};

/// File-backed key-value store: each key maps to `<root>/<key>.json`.
/// Stands in for the browser's localStorage.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    root: PathBuf,
}

impl FileKeyValueStore {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileKeyValueStore {
    #[instrument(level = "debug")]
    fn load(&self, key: &str) -> DomainResult<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(InfrastructureError::FileSystem(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            ))
            .into()),
        }
    }

    #[instrument(level = "debug", skip(value))]
    fn save(&self, key: &str, value: &str) -> DomainResult<()> {
        fs::create_dir_all(&self.root)?;
        let path = self.path_for(key);
        fs::write(&path, value).map_err(|e| {
            InfrastructureError::FileSystem(format!("Failed to write {}: {}", path.display(), e))
        })?;
        debug!("Persisted {} bytes to {}", value.len(), path.display());
        Ok(())
    }
}
