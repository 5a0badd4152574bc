//! Key-value store contract.
//!
//! Every persisted record in this crate goes through this abstraction.
//! Operations are asynchronous and independently fallible; absence of a
//! key is a valid result, not an error.

use async_trait::async_trait;
use thiserror::Error;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Errors surfaced by a store adapter.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The underlying storage backend failed (I/O, platform API, ...)
    #[error("store backend error: {0}")]
    Backend(String),

    /// A persisted record could not be encoded or decoded
    #[error("store codec error")]
    Codec(#[from] serde_json::Error),
}

impl StoreError {
    pub fn backend(msg: impl Into<String>) -> Self {
        StoreError::Backend(msg.into())
    }
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Durable string-keyed storage.
///
/// No atomicity is guaranteed across keys; callers sequencing multiple
/// writes must tolerate partial failure.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read a value. `Ok(None)` means the key does not exist.
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Write a value, overwriting any previous one.
    async fn set(&self, key: &str, value: String) -> StoreResult<()>;

    /// Delete a key. Removing an absent key succeeds.
    async fn remove(&self, key: &str) -> StoreResult<()>;
}
