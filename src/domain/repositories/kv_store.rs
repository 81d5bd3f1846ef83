// marklet/src/domain/repositories/kv_store.rs
use crate::domain::error::DomainResult;

/// Persistent key-value store in the localStorage mold.
///
/// Domain-centric seam for persistence: the session loads one key at
/// startup and writes it back after every list mutation. Implementations
/// decide where the bytes live; tests substitute an in-memory fake.
pub trait KeyValueStore: std::fmt::Debug + Send + Sync {
    /// Returns the stored value, or `None` when the key is absent.
    fn load(&self, key: &str) -> DomainResult<Option<String>>;

    /// Overwrites the value for `key` unconditionally.
    fn save(&self, key: &str, value: &str) -> DomainResult<()>;
}
