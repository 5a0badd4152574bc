//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and storage to fulfill application
//! use cases. They depend on abstractions (traits) for dependency
//! inversion: UI-level callers hold `Arc<dyn ...>` handles.

mod auth_service;
mod biometric_service;
pub mod container;
mod draft_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use auth_service::{AuthService, AuthStatus, Authenticator};
pub use biometric_service::{BiometricManager, BiometricService};
pub use draft_service::{DraftManager, DraftService};

#[cfg(any(test, feature = "test-utils"))]
pub use auth_service::MockAuthService;
#[cfg(any(test, feature = "test-utils"))]
pub use biometric_service::MockBiometricService;
#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;
#[cfg(any(test, feature = "test-utils"))]
pub use draft_service::MockDraftService;
