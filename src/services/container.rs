//! Service container - centralized service access.

use std::sync::Arc;

use super::{AuthService, Authenticator, BiometricManager, BiometricService, DraftManager, DraftService};
use crate::config::Config;
use crate::store::{KeyValueStore, SecureStore};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
///
/// Provides centralized access to all application services.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    /// Get authentication service
    fn auth(&self) -> Arc<dyn AuthService>;

    /// Get biometric unlock service
    fn biometrics(&self) -> Arc<dyn BiometricService>;

    /// Get registration draft service
    fn drafts(&self) -> Arc<dyn DraftService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    biometric_service: Arc<dyn BiometricService>,
    draft_service: Arc<dyn DraftService>,
}

impl Services {
    /// Create a new service container from already-built services
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        biometric_service: Arc<dyn BiometricService>,
        draft_service: Arc<dyn DraftService>,
    ) -> Self {
        Self {
            auth_service,
            biometric_service,
            draft_service,
        }
    }

    /// Wire all services over one key-value store and secure slot
    pub fn from_store<S: KeyValueStore + 'static>(
        kv: Arc<S>,
        secure: Arc<dyn SecureStore>,
        config: Config,
    ) -> Self {
        Self {
            auth_service: Arc::new(Authenticator::new(kv.clone(), secure.clone(), config)),
            biometric_service: Arc::new(BiometricManager::new(kv.clone(), secure)),
            draft_service: Arc::new(DraftManager::new(kv)),
        }
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn biometrics(&self) -> Arc<dyn BiometricService> {
        self.biometric_service.clone()
    }

    fn drafts(&self) -> Arc<dyn DraftService> {
        self.draft_service.clone()
    }
}
