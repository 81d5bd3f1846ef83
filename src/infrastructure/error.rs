// marklet/src/infrastructure/error.rs
use crate::domain::error::DomainError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("File system error: {0}")]
    FileSystem(String),

    #[error("Store error: {0}")]
    Store(String),
}

// Implement conversion from infrastructure errors to domain errors
impl From<InfrastructureError> for DomainError {
    fn from(error: InfrastructureError) -> Self {
        match error {
            InfrastructureError::FileSystem(msg) => DomainError::StoreOperationFailed(msg),
            InfrastructureError::Store(msg) => DomainError::StoreOperationFailed(msg),
        }
    }
}
