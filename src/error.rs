//! Error types for SecureCheck.

use thiserror::Error;

/// Everything that can go wrong around an assessment. The engine itself is
/// total; these come from input validation and from writing exports.
#[derive(Debug, Error)]
pub enum SecureCheckError {
    #[error("Invalid domain: {0:?}")]
    InvalidDomain(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience result type for SecureCheck.
pub type Result<T> = std::result::Result<T, SecureCheckError>;
