//! # cfkeys Store
//!
//! Parameter store abstraction for cfkeys backends.
//!
//! Provides the trait and common types for implementing typed
//! key-value parameter stores (plain vs. encrypted-at-rest values).

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod backend;
pub mod error;

pub use backend::{ParameterKind, ParameterRecord, ParameterStore};
pub use error::StoreError;
