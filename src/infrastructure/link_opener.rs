// marklet/src/infrastructure/link_opener.rs
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::services::link_opener::LinkOpener;
use tracing::{debug, instrument};

/// Opens urls with the platform's default handler (normally the browser).
#[derive(Debug, Default)]
pub struct SystemLinkOpener;

impl SystemLinkOpener {
    pub fn new() -> Self {
        Self
    }
}

impl LinkOpener for SystemLinkOpener {
    #[instrument(level = "debug")]
    fn open(&self, url: &str) -> DomainResult<()> {
        debug!("Opening URL: {}", url);
        open::that(url).map_err(|e| DomainError::Other(format!("Failed to open URL: {}", e)))
    }
}
