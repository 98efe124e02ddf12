//! Key generation error types.

use thiserror::Error;

/// Errors that can occur during key-pair generation.
#[derive(Debug, Error)]
pub enum KeygenError {
    /// RSA key generation failed.
    #[error("key generation failed: {0}")]
    GenerationFailed(String),

    /// PEM encoding of generated key material failed.
    #[error("pem encoding failed: {0}")]
    EncodingFailed(String),

    /// Requested key size is not supported.
    #[error("unsupported key size: {0} bits")]
    UnsupportedKeySize(usize),
}
