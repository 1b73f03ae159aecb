use thiserror::Error;

/// Errors raised by the hash and storage providers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("Hashing failed: {0}")]
    Hash(String),
    #[error("Storage failed: {0}")]
    Storage(String),
}

/// Result type for provider operations.
pub type Result<T> = std::result::Result<T, ProviderError>;
