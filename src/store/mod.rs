//! Storage layer - durable record access
//!
//! This module owns everything that touches persistence:
//! - The key-value store contract and its adapters
//! - The typed record layer the services read and write through
//! - The secure single-slot (keychain-equivalent) contract

pub mod file;
pub mod keychain;
pub mod kv;
pub mod memory;
pub mod records;

pub use file::FileStore;
pub use keychain::{AccessControl, BiometryType, MemorySecureStore, SecureStore, StoredCredentials};
pub use kv::{KeyValueStore, StoreError, StoreResult};
pub use memory::MemoryStore;
pub use records::{CredentialPair, CredentialStore};

#[cfg(any(test, feature = "test-utils"))]
pub use kv::MockKeyValueStore;
