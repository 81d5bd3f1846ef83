// marklet/src/infrastructure/di/service_container.rs
use crate::application::error::ApplicationResult;
use crate::application::services::session_service_impl::SessionServiceImpl;
use crate::config::Settings;
use crate::infrastructure::kv::file_store::FileKeyValueStore;
use crate::infrastructure::link_opener::SystemLinkOpener;
use std::sync::Arc;

/// Production service container - single source of truth for service creation
#[derive(Debug)]
pub struct ServiceContainer {
    pub store: Arc<FileKeyValueStore>,
    pub session_service: SessionServiceImpl<FileKeyValueStore>,
}

impl ServiceContainer {
    /// Create all services with explicit dependency injection
    pub fn new(config: &Settings) -> ApplicationResult<Self> {
        let store = Arc::new(FileKeyValueStore::new(&config.store_path));
        let session_service =
            SessionServiceImpl::new(store.clone(), Arc::new(SystemLinkOpener::new()))?;

        Ok(Self {
            store,
            session_service,
        })
    }
}
