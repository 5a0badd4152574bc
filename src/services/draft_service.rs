//! Registration draft service.
//!
//! Persists a resumable snapshot of the signup form. Password fields are
//! dropped during conversion, so nothing sensitive ever reaches storage.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{RegistrationDraft, RegistrationForm};
use crate::errors::AuthResult;
use crate::store::{CredentialStore, KeyValueStore};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Draft persistence operations.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait DraftService: Send + Sync {
    /// Snapshot the form (minus its secrets) and persist it, overwriting
    /// any previous draft.
    async fn save_draft(&self, form: &RegistrationForm) -> AuthResult<RegistrationDraft>;

    /// Load the saved draft, if any.
    async fn draft(&self) -> AuthResult<Option<RegistrationDraft>>;

    /// Remove the saved draft.
    async fn clear_draft(&self) -> AuthResult<()>;
}

/// Concrete implementation of [`DraftService`].
pub struct DraftManager<S: KeyValueStore> {
    records: CredentialStore<S>,
}

impl<S: KeyValueStore> DraftManager<S> {
    pub fn new(kv: Arc<S>) -> Self {
        Self {
            records: CredentialStore::new(kv),
        }
    }
}

#[async_trait]
impl<S: KeyValueStore> DraftService for DraftManager<S> {
    async fn save_draft(&self, form: &RegistrationForm) -> AuthResult<RegistrationDraft> {
        let draft = RegistrationDraft::from(form);
        self.records.put_draft(&draft).await?;
        Ok(draft)
    }

    async fn draft(&self) -> AuthResult<Option<RegistrationDraft>> {
        Ok(self.records.draft().await?)
    }

    async fn clear_draft(&self) -> AuthResult<()> {
        self.records.clear_draft().await?;
        Ok(())
    }
}
