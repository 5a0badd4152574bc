//! Auth service integration tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use signon::config::Config;
use signon::domain::{NewUser, RegistrationForm};
use signon::errors::AuthError;
use signon::services::{
    AuthService, Authenticator, BiometricManager, BiometricService, DraftManager, DraftService,
    ServiceContainer, Services,
};
use signon::store::{
    BiometryType, CredentialStore, KeyValueStore, MemorySecureStore, MemoryStore, StoreError,
    StoreResult,
};

fn profile() -> NewUser {
    NewUser {
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        phone_number: "+15551234567".to_string(),
        country: "US".to_string(),
    }
}

fn authenticator(kv: Arc<MemoryStore>) -> Authenticator<MemoryStore> {
    Authenticator::new(kv, Arc::new(MemorySecureStore::new()), Config::default())
}

#[tokio::test]
async fn register_then_login_returns_the_registered_profile() {
    let auth = authenticator(Arc::new(MemoryStore::new()));

    let registered = auth
        .register("jane@example.com", "Aa1!aaaa", profile())
        .await
        .unwrap();

    let logged_in = auth.login("jane@example.com", "Aa1!aaaa").await.unwrap();
    assert_eq!(logged_in, registered);
    assert_eq!(logged_in.first_name, "Jane");
    assert_eq!(logged_in.email, "jane@example.com");
}

#[tokio::test]
async fn duplicate_registration_fails_regardless_of_content() {
    let auth = authenticator(Arc::new(MemoryStore::new()));

    auth.register("jane@example.com", "Aa1!aaaa", profile())
        .await
        .unwrap();

    let other_profile = NewUser {
        first_name: "Janet".to_string(),
        last_name: "Smith".to_string(),
        phone_number: "+447700900000".to_string(),
        country: "GB".to_string(),
    };
    let err = auth
        .register("jane@example.com", "Different1!", other_profile)
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::DuplicateUser));
    assert_eq!(err.code(), "DUPLICATE_USER");
}

#[tokio::test]
async fn logout_clears_state_but_keeps_credentials() {
    let kv = Arc::new(MemoryStore::new());
    let auth = authenticator(kv.clone());

    auth.register("jane@example.com", "Aa1!aaaa", profile())
        .await
        .unwrap();
    auth.login("jane@example.com", "Aa1!aaaa").await.unwrap();
    assert!(auth.is_authenticated().await.authenticated);

    auth.logout().await.unwrap();

    let status = auth.is_authenticated().await;
    assert!(!status.authenticated);
    assert!(status.user.is_none());

    // The stored auth state record is gone entirely
    let records = CredentialStore::new(kv);
    assert_eq!(records.auth_state().await.unwrap(), None);

    // Logging in again needs no re-registration
    auth.login("jane@example.com", "Aa1!aaaa").await.unwrap();
    assert!(auth.is_authenticated().await.authenticated);
}

#[tokio::test]
async fn status_tracks_the_last_login_or_logout() {
    let auth = authenticator(Arc::new(MemoryStore::new()));

    // Fresh install: signed out
    assert!(!auth.is_authenticated().await.authenticated);

    auth.register("jane@example.com", "Aa1!aaaa", profile())
        .await
        .unwrap();

    // Registration alone does not sign anyone in
    assert!(!auth.is_authenticated().await.authenticated);

    auth.login("jane@example.com", "Aa1!aaaa").await.unwrap();
    let status = auth.is_authenticated().await;
    assert!(status.authenticated);
    assert_eq!(status.user.unwrap().email, "jane@example.com");

    // A failed login signs the current user out
    let _ = auth.login("jane@example.com", "Wrong1!wrong").await;
    assert!(!auth.is_authenticated().await.authenticated);
}

// ── Partial-failure behavior ────────────────────────────────────────────

/// Store that fails writes to keys with a configured prefix.
struct FlakyStore {
    entries: Mutex<HashMap<String, String>>,
    fail_prefix: Mutex<Option<String>>,
}

impl FlakyStore {
    fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            fail_prefix: Mutex::new(None),
        }
    }

    fn fail_writes_to(&self, prefix: &str) {
        *self.fail_prefix.lock().unwrap() = Some(prefix.to_string());
    }

    fn recover(&self) {
        *self.fail_prefix.lock().unwrap() = None;
    }
}

#[async_trait]
impl KeyValueStore for FlakyStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> StoreResult<()> {
        if let Some(prefix) = self.fail_prefix.lock().unwrap().as_deref() {
            if key.starts_with(prefix) {
                return Err(StoreError::backend("simulated write failure"));
            }
        }
        self.entries.lock().unwrap().insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> StoreResult<()> {
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }
}

#[tokio::test]
async fn credential_write_failure_leaves_an_orphaned_profile() {
    let kv = Arc::new(FlakyStore::new());
    let auth = Authenticator::new(
        kv.clone(),
        Arc::new(MemorySecureStore::new()),
        Config::default(),
    );

    kv.fail_writes_to("credentials:");
    let err = auth
        .register("jane@example.com", "Aa1!aaaa", profile())
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::Store(_)));

    // The profile write went through, the credential pair and the index
    // append did not: no rollback is attempted.
    let records = CredentialStore::new(kv.clone());
    assert!(records.user("jane@example.com").await.unwrap().is_some());
    assert!(records
        .credentials("jane@example.com")
        .await
        .unwrap()
        .is_none());
    assert!(records.registered_users().await.unwrap().is_empty());

    // Once the store recovers, registration can be retried: the email
    // never made it into the index.
    kv.recover();
    auth.register("jane@example.com", "Aa1!aaaa", profile())
        .await
        .unwrap();
    auth.login("jane@example.com", "Aa1!aaaa").await.unwrap();
}

// ── Biometric unlock end-to-end ─────────────────────────────────────────

#[tokio::test]
async fn biometric_credentials_log_in_end_to_end() {
    let kv = Arc::new(MemoryStore::new());
    let secure = Arc::new(MemorySecureStore::with_biometry(BiometryType::FaceId));
    let services = Services::from_store(kv, secure, Config::default());

    let auth = services.auth();
    let biometrics = services.biometrics();

    auth.register("jane@example.com", "Aa1!aaaa", profile())
        .await
        .unwrap();
    biometrics
        .enable("jane@example.com", "Aa1!aaaa")
        .await
        .unwrap();
    auth.logout().await.unwrap();

    let creds = biometrics.authenticate("Log in to your account").await.unwrap();
    let user = auth.login(&creds.username, &creds.password).await.unwrap();
    assert_eq!(user.email, "jane@example.com");
    assert!(auth.is_authenticated().await.authenticated);
}

// ── Draft lifecycle ─────────────────────────────────────────────────────

#[tokio::test]
async fn draft_resumes_an_interrupted_signup() {
    let kv = Arc::new(MemoryStore::new());
    let auth = authenticator(kv.clone());
    let drafts = DraftManager::new(kv);

    let form = RegistrationForm {
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        email: "jane@example.com".to_string(),
        phone_number: "+15551234567".to_string(),
        country: "US".to_string(),
        password: "Aa1!aaaa".to_string(),
        confirm_password: "Aa1!aaaa".to_string(),
        agree_to_terms: true,
    };
    drafts.save_draft(&form).await.unwrap();

    // The app restarts; the draft still has the typed (non-secret) fields
    let resumed = drafts.draft().await.unwrap().unwrap();
    assert_eq!(resumed.email, "jane@example.com");
    assert!(resumed.agree_to_terms);

    // Registration succeeds and the caller clears the draft afterwards
    auth.register(&resumed.email, &form.password, profile())
        .await
        .unwrap();
    drafts.clear_draft().await.unwrap();
    assert_eq!(drafts.draft().await.unwrap(), None);
}

// ── Biometric service over the container ────────────────────────────────

#[tokio::test]
async fn container_services_share_one_store() {
    let kv = Arc::new(MemoryStore::new());
    let secure = Arc::new(MemorySecureStore::with_biometry(BiometryType::Fingerprint));
    let services = Services::from_store(kv.clone(), secure.clone(), Config::default());

    services
        .auth()
        .register("jane@example.com", "Aa1!aaaa", profile())
        .await
        .unwrap();

    // A separately-built manager over the same store sees the same flag
    services
        .biometrics()
        .enable("jane@example.com", "Aa1!aaaa")
        .await
        .unwrap();
    let standalone = BiometricManager::new(kv, secure);
    assert!(standalone.is_enabled().await.unwrap());
}
