//! Biometric unlock service.
//!
//! Wraps the secure single-slot store: enabling biometric login parks the
//! credentials in the slot behind a biometric gate, and authenticating
//! releases them for a normal login call.

use async_trait::async_trait;
use std::sync::Arc;

use crate::errors::{AuthError, AuthResult};
use crate::store::{
    AccessControl, BiometryType, CredentialStore, KeyValueStore, SecureStore, StoredCredentials,
};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Biometric unlock operations.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait BiometricService: Send + Sync {
    /// Whether the device offers any biometric modality.
    async fn is_available(&self) -> AuthResult<bool>;

    /// The device's biometric modality, if any.
    async fn biometry_type(&self) -> AuthResult<Option<BiometryType>>;

    /// Whether biometric login has been enabled on this installation.
    async fn is_enabled(&self) -> AuthResult<bool>;

    /// Park the credentials behind a biometric gate and flip the flag on.
    async fn enable(&self, email: &str, password: &str) -> AuthResult<()>;

    /// Flip the flag off. The gated slot is left in place.
    async fn disable(&self) -> AuthResult<()>;

    /// Run the biometric check and release the stored credentials.
    async fn authenticate(&self, prompt: &str) -> AuthResult<StoredCredentials>;
}

/// Concrete implementation of [`BiometricService`].
pub struct BiometricManager<S: KeyValueStore> {
    records: CredentialStore<S>,
    secure: Arc<dyn SecureStore>,
}

impl<S: KeyValueStore> BiometricManager<S> {
    pub fn new(kv: Arc<S>, secure: Arc<dyn SecureStore>) -> Self {
        Self {
            records: CredentialStore::new(kv),
            secure,
        }
    }
}

#[async_trait]
impl<S: KeyValueStore> BiometricService for BiometricManager<S> {
    async fn is_available(&self) -> AuthResult<bool> {
        Ok(self.secure.biometry_type().await?.is_some())
    }

    async fn biometry_type(&self) -> AuthResult<Option<BiometryType>> {
        Ok(self.secure.biometry_type().await?)
    }

    async fn is_enabled(&self) -> AuthResult<bool> {
        Ok(self.records.biometric_enabled().await?)
    }

    async fn enable(&self, email: &str, password: &str) -> AuthResult<()> {
        if self.secure.biometry_type().await?.is_none() {
            return Err(AuthError::BiometricUnavailable);
        }

        self.secure
            .store(email, password, AccessControl::BiometryAny)
            .await?;
        self.records.set_biometric_enabled(true).await?;

        tracing::debug!(email, "biometric login enabled");
        Ok(())
    }

    async fn disable(&self) -> AuthResult<()> {
        self.records.set_biometric_enabled(false).await?;
        tracing::debug!("biometric login disabled");
        Ok(())
    }

    async fn authenticate(&self, prompt: &str) -> AuthResult<StoredCredentials> {
        if !self.records.biometric_enabled().await? {
            return Err(AuthError::BiometricUnavailable);
        }

        match self.secure.retrieve(Some(prompt)).await {
            Ok(Some(creds)) => Ok(creds),
            Ok(None) => Err(AuthError::BiometricFailed),
            Err(e) => {
                tracing::warn!("biometric retrieval failed: {}", e);
                Err(AuthError::BiometricFailed)
            }
        }
    }
}
