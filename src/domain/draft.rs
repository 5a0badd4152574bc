//! Registration form and its persisted draft.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The full in-progress signup form, as the UI holds it.
///
/// Carries the secrets the user typed; only ever converted to a
/// [`RegistrationDraft`] before anything is persisted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub country: String,
    pub password: String,
    pub confirm_password: String,
    pub agree_to_terms: bool,
}

/// Persisted snapshot of an in-progress registration.
///
/// Has no password fields at all, so the never-persist-secrets rule holds
/// by construction rather than by discipline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub country: String,
    pub agree_to_terms: bool,
    pub last_updated: DateTime<Utc>,
}

impl From<&RegistrationForm> for RegistrationDraft {
    fn from(form: &RegistrationForm) -> Self {
        Self {
            first_name: form.first_name.clone(),
            last_name: form.last_name.clone(),
            email: form.email.clone(),
            phone_number: form.phone_number.clone(),
            country: form.country.clone(),
            agree_to_terms: form.agree_to_terms,
            last_updated: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_never_contains_password_material() {
        let form = RegistrationForm {
            first_name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            password: "Hunter2!Hunter2!".to_string(),
            confirm_password: "Hunter2!Hunter2!".to_string(),
            ..Default::default()
        };

        let draft = RegistrationDraft::from(&form);
        let json = serde_json::to_string(&draft).unwrap();

        assert!(!json.contains("Hunter2!"));
        assert!(!json.contains("password"));
        assert_eq!(draft.email, "jane@example.com");
    }

    #[test]
    fn conversion_stamps_last_updated() {
        let before = Utc::now();
        let draft = RegistrationDraft::from(&RegistrationForm::default());
        assert!(draft.last_updated >= before);
    }
}
