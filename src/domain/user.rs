//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered account's public profile.
///
/// The email doubles as the unique identifier. Profiles are written once at
/// registration and never updated by this core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub country: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new profile from registration input, stamping the creation time
    pub fn new(email: impl Into<String>, profile: NewUser) -> Self {
        Self {
            first_name: profile.first_name,
            last_name: profile.last_name,
            email: email.into(),
            phone_number: profile.phone_number,
            country: profile.country,
            created_at: Utc::now(),
        }
    }

    /// Full display name
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Profile fields supplied at registration.
///
/// Email and creation time are added by the auth service.
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub country: String,
}
