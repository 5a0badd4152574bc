//! Centralized error handling.
//!
//! Provides a unified error type for the whole crate, with stable
//! machine-readable codes for the UI layer.

use thiserror::Error;

use crate::store::StoreError;

/// Application error types.
///
/// Lockout and invalid-credential variants carry the quantitative detail
/// (remaining minutes, remaining attempts) that the UI must surface; the
/// numbers are part of the contract, not decoration.
#[derive(Error, Debug)]
pub enum AuthError {
    // Authentication
    #[error("Invalid credentials. {remaining} attempt(s) remaining")]
    InvalidCredentials { remaining: u32 },

    #[error("Account locked. Try again in {remaining_minutes} minute(s)")]
    AccountLocked { remaining_minutes: i64 },

    // Registration
    #[error("User already exists")]
    DuplicateUser,

    // Data integrity: credentials exist but the profile record is gone
    #[error("User data not found")]
    UserDataMissing,

    // Biometrics (collaborator-reported)
    #[error("Biometric authentication is not available")]
    BiometricUnavailable,

    #[error("Biometric authentication failed")]
    BiometricFailed,

    // Validation
    #[error("{0}")]
    Validation(String),

    // Underlying store failures, converted at the service boundary
    #[error("Storage operation failed")]
    Store(#[from] StoreError),

    // Internal
    #[error("Internal error")]
    Internal(String),
}

impl AuthError {
    /// Get error code for the UI layer
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::InvalidCredentials { .. } => "INVALID_CREDENTIALS",
            AuthError::AccountLocked { .. } => "ACCOUNT_LOCKED",
            AuthError::DuplicateUser => "DUPLICATE_USER",
            AuthError::UserDataMissing => "USER_DATA_MISSING",
            AuthError::BiometricUnavailable => "BIOMETRIC_UNAVAILABLE",
            AuthError::BiometricFailed => "BIOMETRIC_FAILED",
            AuthError::Validation(_) => "VALIDATION_ERROR",
            AuthError::Store(_) => "STORE_FAILURE",
            AuthError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            AuthError::Store(e) => {
                tracing::error!("Store error: {:?}", e);
                "A storage error occurred".to_string()
            }
            AuthError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
            _ => self.to_string(),
        }
    }
}

/// Convenience constructors
impl AuthError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AuthError::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AuthError::Internal(msg.into())
    }
}

/// Result type alias
pub type AuthResult<T> = Result<T, AuthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lockout_message_carries_remaining_minutes() {
        let err = AuthError::AccountLocked {
            remaining_minutes: 15,
        };
        assert_eq!(
            err.to_string(),
            "Account locked. Try again in 15 minute(s)"
        );
        assert_eq!(err.code(), "ACCOUNT_LOCKED");
    }

    #[test]
    fn invalid_credentials_message_carries_remaining_attempts() {
        let err = AuthError::InvalidCredentials { remaining: 3 };
        assert_eq!(err.to_string(), "Invalid credentials. 3 attempt(s) remaining");
        assert_eq!(err.code(), "INVALID_CREDENTIALS");
    }

    #[test]
    fn store_error_is_hidden_from_users() {
        let err = AuthError::Store(StoreError::backend("disk full"));
        assert_eq!(err.user_message(), "A storage error occurred");
        assert_eq!(err.code(), "STORE_FAILURE");
    }
}
