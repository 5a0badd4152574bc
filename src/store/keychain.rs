//! Secure single-slot credential store contract.
//!
//! Models the platform keychain: one global (username, password) slot
//! whose reads can be gated behind a biometric check. Real platform
//! adapters live outside this crate; [`MemorySecureStore`] stands in for
//! them in wiring and tests.

use std::sync::Mutex;

use async_trait::async_trait;

use super::kv::{StoreError, StoreResult};

/// Protection applied to the stored slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessControl {
    /// Readable whenever the device is unlocked
    Standard,
    /// Readable only after any enrolled biometric verifies
    BiometryAny,
}

/// Biometric modality reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BiometryType {
    TouchId,
    FaceId,
    Fingerprint,
    Face,
    Iris,
}

impl std::fmt::Display for BiometryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            BiometryType::TouchId => "Touch ID",
            BiometryType::FaceId => "Face ID",
            BiometryType::Fingerprint => "Fingerprint",
            BiometryType::Face => "Face Recognition",
            BiometryType::Iris => "Iris Recognition",
        };
        write!(f, "{}", name)
    }
}

/// Credentials released from the secure slot.
#[derive(Clone, PartialEq, Eq)]
pub struct StoredCredentials {
    pub username: String,
    pub password: String,
}

// Keep the secret out of debug output
impl std::fmt::Debug for StoredCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoredCredentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// The platform keychain-equivalent.
///
/// Holds at most one credential pair per installation. The slot stores
/// the raw secret: biometric unlock has to release usable credentials.
#[async_trait]
pub trait SecureStore: Send + Sync {
    /// Write the slot, replacing any previous contents.
    async fn store(
        &self,
        username: &str,
        password: &str,
        access: AccessControl,
    ) -> StoreResult<()>;

    /// Read the slot, presenting `prompt` when the platform gates the
    /// read behind a biometric check. `Ok(None)` means the slot is empty.
    async fn retrieve(&self, prompt: Option<&str>) -> StoreResult<Option<StoredCredentials>>;

    /// Empty the slot.
    async fn clear(&self) -> StoreResult<()>;

    /// The biometric modality available on this device, if any.
    async fn biometry_type(&self) -> StoreResult<Option<BiometryType>>;
}

/// In-process [`SecureStore`] used in wiring and tests.
///
/// Releases the slot without a real biometric check; the configured
/// modality only drives availability queries.
pub struct MemorySecureStore {
    biometry: Option<BiometryType>,
    slot: Mutex<Option<(StoredCredentials, AccessControl)>>,
}

impl MemorySecureStore {
    /// A store on a device with no biometric hardware.
    pub fn new() -> Self {
        Self {
            biometry: None,
            slot: Mutex::new(None),
        }
    }

    /// A store on a device reporting the given biometric modality.
    pub fn with_biometry(biometry: BiometryType) -> Self {
        Self {
            biometry: Some(biometry),
            slot: Mutex::new(None),
        }
    }
}

impl Default for MemorySecureStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SecureStore for MemorySecureStore {
    async fn store(
        &self,
        username: &str,
        password: &str,
        access: AccessControl,
    ) -> StoreResult<()> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| StoreError::backend("keychain mutex poisoned"))?;
        *slot = Some((
            StoredCredentials {
                username: username.to_string(),
                password: password.to_string(),
            },
            access,
        ));
        Ok(())
    }

    async fn retrieve(&self, _prompt: Option<&str>) -> StoreResult<Option<StoredCredentials>> {
        let slot = self
            .slot
            .lock()
            .map_err(|_| StoreError::backend("keychain mutex poisoned"))?;
        Ok(slot.as_ref().map(|(creds, _)| creds.clone()))
    }

    async fn clear(&self) -> StoreResult<()> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| StoreError::backend("keychain mutex poisoned"))?;
        *slot = None;
        Ok(())
    }

    async fn biometry_type(&self) -> StoreResult<Option<BiometryType>> {
        Ok(self.biometry)
    }
}
