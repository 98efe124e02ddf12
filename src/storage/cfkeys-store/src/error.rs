//! Store error types.

use thiserror::Error;

/// Errors that can occur during parameter store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Parameter not found.
    #[error("parameter not found: {0}")]
    NotFound(String),

    /// Access denied by the store's permission model.
    #[error("access denied: {0}")]
    AccessDenied(String),

    /// Parameter exists and overwrite was not requested.
    #[error("parameter already exists: {0}")]
    AlreadyExists(String),

    /// Invalid parameter path or value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Connection error.
    #[error("connection error: {0}")]
    Connection(String),

    /// Generic I/O error.
    #[error("io error: {0}")]
    Io(String),
}

impl StoreError {
    /// Whether this error is the distinguishable not-found condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}
