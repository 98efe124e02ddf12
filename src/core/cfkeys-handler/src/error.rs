//! Handler and callback error types.

use thiserror::Error;

/// Errors that can occur while handling a lifecycle event.
///
/// All variants are converted into a FAILED callback at the top of the
/// handler; none propagate to the invoker.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// Required event fields are missing or mistyped.
    #[error("malformed event: {0}")]
    MalformedEvent(String),

    /// Key-pair generation failed.
    #[error("key generation error: {0}")]
    Keygen(#[from] cfkeys_keygen::KeygenError),

    /// Parameter store read/write failed.
    #[error("store error: {0}")]
    Store(#[from] cfkeys_store::StoreError),
}

/// Errors that can occur delivering the result callback.
///
/// Delivery is best-effort: these are logged by the handler and never
/// escalated.
#[derive(Debug, Error)]
pub enum CallbackError {
    /// Payload serialization failed.
    #[error("payload serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// HTTP transport failure.
    #[error("callback transport failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The callback endpoint answered with a non-success status.
    #[error("callback rejected with status {0}")]
    Rejected(u16),
}
