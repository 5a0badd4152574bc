//! Authentication service - registration, login, lockout, and status.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::config::Config;
use crate::domain::{AuthState, NewUser, Password, User};
use crate::errors::{AuthError, AuthResult};
use crate::store::{CredentialPair, CredentialStore, KeyValueStore, SecureStore};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Result of an authentication-status query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthStatus {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

impl AuthStatus {
    fn signed_out() -> Self {
        Self {
            authenticated: false,
            user: None,
        }
    }
}

/// Authentication service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new account and return the stored profile.
    ///
    /// Does not clear any registration draft; that stays with the caller.
    async fn register(&self, email: &str, password: &str, profile: NewUser) -> AuthResult<User>;

    /// Log in and return the account's profile.
    async fn login(&self, email: &str, password: &str) -> AuthResult<User>;

    /// Clear the signed-in state. Credentials and profile are retained so
    /// the same user can log in again without re-registering.
    async fn logout(&self) -> AuthResult<()>;

    /// Who is currently signed in, per the stored auth state.
    async fn is_authenticated(&self) -> AuthStatus;

    /// Check a credential pair without mutating any state.
    async fn verify_credentials(&self, email: &str, password: &str) -> AuthResult<bool>;
}

/// Concrete implementation of [`AuthService`] over a key-value store.
pub struct Authenticator<S: KeyValueStore> {
    records: CredentialStore<S>,
    secure: Arc<dyn SecureStore>,
    config: Config,
    /// Serializes every read-modify-write of the shared auth state and
    /// registered index; a racing login could otherwise undercount
    /// lockout triggers.
    state_lock: Mutex<()>,
}

impl<S: KeyValueStore> Authenticator<S> {
    pub fn new(kv: Arc<S>, secure: Arc<dyn SecureStore>, config: Config) -> Self {
        Self {
            records: CredentialStore::new(kv),
            secure,
            config,
            state_lock: Mutex::new(()),
        }
    }

    /// Two-tier credential check.
    ///
    /// Primary: the per-email credential pair, verified against its hash.
    /// Legacy: the platform's single slot, kept for installations that
    /// predate per-email pairs (migration shim). A store failure surfaces
    /// as an error rather than counting as a mismatch.
    async fn verify_stored(&self, email: &str, password: &str) -> AuthResult<bool> {
        if let Some(pair) = self.records.credentials(email).await? {
            let matches =
                pair.email == email && Password::from_hash(pair.password_hash).verify(password);
            return Ok(matches);
        }

        match self.secure.retrieve(None).await? {
            Some(creds) if creds.username == email => Ok(creds.password == password),
            _ => Ok(false),
        }
    }
}

#[async_trait]
impl<S: KeyValueStore> AuthService for Authenticator<S> {
    async fn register(&self, email: &str, password: &str, profile: NewUser) -> AuthResult<User> {
        // Hash (and length-check) before touching the store
        let password = Password::new(password)?;

        let _guard = self.state_lock.lock().await;

        let registered = self.records.registered_users().await?;
        if registered.iter().any(|u| u == email) {
            return Err(AuthError::DuplicateUser);
        }

        // Three writes, in order, each independently fallible. A failure
        // aborts the sequence and leaves the earlier writes in place; the
        // caller sees a single failure and no rollback is attempted.
        let user = User::new(email, profile);
        self.records.put_user(&user).await?;
        self.records
            .put_credentials(&CredentialPair {
                email: email.to_string(),
                password_hash: password.into_string(),
            })
            .await?;
        self.records.add_registered_user(email).await?;

        tracing::debug!(email, "registration completed");
        Ok(user)
    }

    async fn login(&self, email: &str, password: &str) -> AuthResult<User> {
        let _guard = self.state_lock.lock().await;
        let now = Utc::now();
        let state = self.records.auth_state().await?;

        if let Some(state) = &state {
            if state.lockout_active(now) {
                return Err(AuthError::AccountLocked {
                    remaining_minutes: state.remaining_lockout_minutes(now),
                });
            }
        }

        if !self.verify_stored(email, password).await? {
            let attempts = state.map(|s| s.failed_login_attempts).unwrap_or(0) + 1;
            let locked = attempts >= self.config.max_failed_attempts;
            let lockout_until =
                locked.then(|| now + Duration::minutes(self.config.lockout_minutes));

            self.records
                .put_auth_state(&AuthState::failed(attempts, lockout_until))
                .await?;

            return Err(if locked {
                tracing::warn!(attempts, "login lockout triggered");
                AuthError::AccountLocked {
                    remaining_minutes: self.config.lockout_minutes,
                }
            } else {
                AuthError::InvalidCredentials {
                    remaining: self.config.max_failed_attempts - attempts,
                }
            });
        }

        let Some(user) = self.records.user(email).await? else {
            // Integrity fault: a credential pair without its profile
            tracing::warn!(email, "credentials exist without a profile record");
            return Err(AuthError::UserDataMissing);
        };

        self.records
            .put_auth_state(&AuthState::signed_in(user.clone()))
            .await?;

        tracing::debug!(email, "login succeeded");
        Ok(user)
    }

    async fn logout(&self) -> AuthResult<()> {
        let _guard = self.state_lock.lock().await;
        // Only the auth state goes; credentials and profile stay so the
        // user can sign back in.
        self.records.clear_auth_state().await?;
        tracing::debug!("logged out");
        Ok(())
    }

    async fn is_authenticated(&self) -> AuthStatus {
        match self.records.auth_state().await {
            Ok(Some(state)) if state.is_authenticated => match state.user {
                Some(user) => AuthStatus {
                    authenticated: true,
                    user: Some(user),
                },
                None => AuthStatus::signed_out(),
            },
            Ok(_) => AuthStatus::signed_out(),
            Err(e) => {
                // This query has no failure arm; an unreadable state
                // reads as signed out.
                tracing::warn!("failed to read auth state: {}", e);
                AuthStatus::signed_out()
            }
        }
    }

    async fn verify_credentials(&self, email: &str, password: &str) -> AuthResult<bool> {
        self.verify_stored(email, password).await
    }
}
