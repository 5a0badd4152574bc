//! Password value object.
//!
//! Owns hashing and verification so no other layer ever touches a raw
//! secret together with its stored form.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::config::MIN_PASSWORD_LENGTH;
use crate::errors::{AuthError, AuthResult};

/// A password in its stored (hashed) form.
#[derive(Clone)]
pub struct Password {
    hash: String,
}

// Keep the hash out of debug output
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Hash a plain-text password for storage.
    ///
    /// # Errors
    /// Returns a validation error when the password is shorter than the
    /// minimum length.
    pub fn new(plain_text: &str) -> AuthResult<Self> {
        if plain_text.len() < MIN_PASSWORD_LENGTH {
            return Err(AuthError::validation(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }

        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| AuthError::internal(format!("Password hash failed: {}", e)))?
            .to_string();

        Ok(Self { hash })
    }

    /// Wrap a hash loaded from storage.
    pub fn from_hash(hash: String) -> Self {
        Self { hash }
    }

    /// The hash string, for persistence.
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Consume and return the hash string.
    pub fn into_string(self) -> String {
        self.hash
    }

    /// Check a plain-text password against this hash.
    ///
    /// An unparseable stored hash verifies as false rather than erroring;
    /// the caller treats it the same as a wrong password.
    pub fn verify(&self, plain_text: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(&self.hash) else {
            return false;
        };
        Argon2::default()
            .verify_password(plain_text.as_bytes(), &parsed)
            .is_ok()
    }
}
