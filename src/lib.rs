//! signon - registration, login, and lockout core
//!
//! The credential/auth core of a single-device account-setup app:
//! registration, login with failed-attempt lockout, logout,
//! authentication-status queries, biometric unlock, and
//! registration-draft persistence, all over a pluggable asynchronous
//! key-value store.
//!
//! # Architecture Layers
//!
//! - **config**: lockout policy and persisted-record keys
//! - **domain**: core entities (user, auth state, password, draft)
//! - **store**: the key-value contract, its adapters, the typed record
//!   layer, and the secure single-slot (keychain-equivalent) contract
//! - **services**: the auth state machine, biometric unlock, drafts
//! - **errors**: centralized error handling
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use signon::config::Config;
//! use signon::domain::NewUser;
//! use signon::services::{AuthService, ServiceContainer, Services};
//! use signon::store::{MemorySecureStore, MemoryStore};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let services = Services::from_store(
//!     Arc::new(MemoryStore::new()),
//!     Arc::new(MemorySecureStore::new()),
//!     Config::default(),
//! );
//!
//! let auth = services.auth();
//! let profile = NewUser {
//!     first_name: "Jane".to_string(),
//!     last_name: "Doe".to_string(),
//!     phone_number: "+15551234567".to_string(),
//!     country: "US".to_string(),
//! };
//! auth.register("jane@example.com", "Aa1!aaaa", profile).await.unwrap();
//! let user = auth.login("jane@example.com", "Aa1!aaaa").await.unwrap();
//! assert_eq!(user.email, "jane@example.com");
//! # }
//! ```

pub mod config;
pub mod domain;
pub mod errors;
pub mod services;
pub mod store;

// Re-export commonly used types at crate root
pub use config::Config;
pub use domain::{AuthState, NewUser, Password, RegistrationDraft, RegistrationForm, User};
pub use errors::{AuthError, AuthResult};
pub use services::{AuthService, AuthStatus, Authenticator, ServiceContainer, Services};
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};
