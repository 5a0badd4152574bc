//! Typed record layer over the key-value store.
//!
//! Gives every persisted record a dedicated key and serde round-tripping,
//! so services never handle raw key strings or JSON.

use std::sync::Arc;

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use super::kv::{KeyValueStore, StoreResult};
use crate::config::{
    KEY_AUTH_STATE, KEY_BIOMETRIC_ENABLED, KEY_DRAFT_REGISTRATION, KEY_PREFIX_CREDENTIALS,
    KEY_PREFIX_USER, KEY_REGISTERED_USERS,
};
use crate::domain::{AuthState, RegistrationDraft, User};

/// A user's stored login credential: email plus password hash.
///
/// Kept separate from the profile record so reading one never exposes
/// the other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialPair {
    pub email: String,
    pub password_hash: String,
}

/// Typed access to every record this crate persists.
pub struct CredentialStore<S: KeyValueStore> {
    kv: Arc<S>,
}

impl<S: KeyValueStore> Clone for CredentialStore<S> {
    fn clone(&self) -> Self {
        Self {
            kv: self.kv.clone(),
        }
    }
}

impl<S: KeyValueStore> CredentialStore<S> {
    pub fn new(kv: Arc<S>) -> Self {
        Self { kv }
    }

    async fn read<T: DeserializeOwned>(&self, key: &str) -> StoreResult<Option<T>> {
        match self.kv.get(key).await? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    async fn write<T: Serialize + Sync>(&self, key: &str, value: &T) -> StoreResult<()> {
        let json = serde_json::to_string(value)?;
        self.kv.set(key, json).await
    }

    // =========================================================================
    // Auth State
    // =========================================================================

    pub async fn auth_state(&self) -> StoreResult<Option<AuthState>> {
        self.read(KEY_AUTH_STATE).await
    }

    pub async fn put_auth_state(&self, state: &AuthState) -> StoreResult<()> {
        self.write(KEY_AUTH_STATE, state).await
    }

    pub async fn clear_auth_state(&self) -> StoreResult<()> {
        self.kv.remove(KEY_AUTH_STATE).await
    }

    // =========================================================================
    // User Profiles
    // =========================================================================

    pub async fn user(&self, email: &str) -> StoreResult<Option<User>> {
        self.read(&format!("{}{}", KEY_PREFIX_USER, email)).await
    }

    pub async fn put_user(&self, user: &User) -> StoreResult<()> {
        self.write(&format!("{}{}", KEY_PREFIX_USER, user.email), user)
            .await
    }

    // =========================================================================
    // Credential Pairs
    // =========================================================================

    pub async fn credentials(&self, email: &str) -> StoreResult<Option<CredentialPair>> {
        self.read(&format!("{}{}", KEY_PREFIX_CREDENTIALS, email))
            .await
    }

    pub async fn put_credentials(&self, pair: &CredentialPair) -> StoreResult<()> {
        self.write(&format!("{}{}", KEY_PREFIX_CREDENTIALS, pair.email), pair)
            .await
    }

    // =========================================================================
    // Registered-Users Index
    // =========================================================================

    /// Emails of all accounts that completed registration.
    /// An absent index reads as empty.
    pub async fn registered_users(&self) -> StoreResult<Vec<String>> {
        Ok(self.read(KEY_REGISTERED_USERS).await?.unwrap_or_default())
    }

    /// Append an email to the index; already-present emails are kept once.
    pub async fn add_registered_user(&self, email: &str) -> StoreResult<()> {
        let mut users = self.registered_users().await?;
        if !users.iter().any(|u| u == email) {
            users.push(email.to_string());
            self.write(KEY_REGISTERED_USERS, &users).await?;
        }
        Ok(())
    }

    // =========================================================================
    // Registration Draft
    // =========================================================================

    pub async fn draft(&self) -> StoreResult<Option<RegistrationDraft>> {
        self.read(KEY_DRAFT_REGISTRATION).await
    }

    pub async fn put_draft(&self, draft: &RegistrationDraft) -> StoreResult<()> {
        self.write(KEY_DRAFT_REGISTRATION, draft).await
    }

    pub async fn clear_draft(&self) -> StoreResult<()> {
        self.kv.remove(KEY_DRAFT_REGISTRATION).await
    }

    // =========================================================================
    // Biometric Flag
    // =========================================================================

    /// The flag is persisted as the literal strings "true"/"false";
    /// anything else (including absence) reads as disabled.
    pub async fn biometric_enabled(&self) -> StoreResult<bool> {
        Ok(matches!(
            self.kv.get(KEY_BIOMETRIC_ENABLED).await?.as_deref(),
            Some("true")
        ))
    }

    pub async fn set_biometric_enabled(&self, enabled: bool) -> StoreResult<()> {
        self.kv
            .set(KEY_BIOMETRIC_ENABLED, enabled.to_string())
            .await
    }
}
