//! Parameter store trait definition.

use async_trait::async_trait;

use crate::error::StoreError;

/// How a parameter value is held at rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterKind {
    /// Encrypted-at-rest secret value.
    Secret,
    /// Plain string value.
    Plain,
}

/// A parameter to be written to the store.
#[derive(Debug, Clone)]
pub struct ParameterRecord {
    /// Hierarchical path (e.g. `/prod/edge/cloudfront/public-key`).
    pub path: String,
    /// The parameter value.
    pub value: String,
    /// Plain or secret typing.
    pub kind: ParameterKind,
    /// Human-readable description stored alongside the value.
    pub description: String,
}

impl ParameterRecord {
    /// Creates a record with the given path, value, kind, and description.
    pub fn new(
        path: impl Into<String>,
        value: impl Into<String>,
        kind: ParameterKind,
        description: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            value: value.into(),
            kind,
            description: description.into(),
        }
    }
}

/// Parameter store trait for implementing different store backends.
#[async_trait]
pub trait ParameterStore: Send + Sync {
    /// Write a parameter.
    ///
    /// With `overwrite` set, an existing parameter at the same path is
    /// replaced; otherwise the write fails with
    /// [`StoreError::AlreadyExists`].
    async fn put(&self, record: &ParameterRecord, overwrite: bool) -> Result<(), StoreError>;

    /// Read a parameter value by path.
    ///
    /// Fails with [`StoreError::NotFound`] when the path is absent.
    async fn get(&self, path: &str) -> Result<String, StoreError>;

    /// Check if a parameter exists.
    async fn exists(&self, path: &str) -> Result<bool, StoreError> {
        match self.get(path).await {
            Ok(_) => Ok(true),
            Err(StoreError::NotFound(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }
}
