//! # cfkeys Store - Memory Backend
//!
//! In-memory implementation of the parameter store, used by the local
//! invocation harness and by tests. Values live in a map guarded by an
//! async lock; nothing survives the process.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use cfkeys_store::{ParameterRecord, ParameterStore, StoreError};

/// In-memory parameter store backend.
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, ParameterRecord>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored parameters.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Whether the store holds no parameters.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Returns a copy of the record at `path`, if present.
    pub async fn record(&self, path: &str) -> Option<ParameterRecord> {
        self.entries.read().await.get(path).cloned()
    }
}

#[async_trait]
impl ParameterStore for MemoryStore {
    async fn put(&self, record: &ParameterRecord, overwrite: bool) -> Result<(), StoreError> {
        if record.path.is_empty() {
            return Err(StoreError::InvalidParameter("path cannot be empty".into()));
        }

        let mut entries = self.entries.write().await;
        if !overwrite && entries.contains_key(&record.path) {
            return Err(StoreError::AlreadyExists(record.path.clone()));
        }

        debug!(path = %record.path, kind = ?record.kind, "Parameter stored");
        entries.insert(record.path.clone(), record.clone());
        Ok(())
    }

    async fn get(&self, path: &str) -> Result<String, StoreError> {
        let entries = self.entries.read().await;
        entries
            .get(path)
            .map(|record| record.value.clone())
            .ok_or_else(|| StoreError::NotFound(path.to_string()))
    }
}
