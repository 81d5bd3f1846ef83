// marklet/src/domain/services/link_opener.rs
use crate::domain::error::DomainResult;

/// Opens a bookmark url in a new browsing context.
///
/// Entirely delegated to the platform; the core never inspects the outcome
/// beyond logging a failure.
pub trait LinkOpener: std::fmt::Debug + Send + Sync {
    fn open(&self, url: &str) -> DomainResult<()>;
}
