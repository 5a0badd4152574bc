//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Login Lockout
// =============================================================================

/// Failed login attempts allowed before the account is locked
pub const MAX_FAILED_LOGIN_ATTEMPTS: u32 = 5;

/// How long a lockout lasts, in minutes
pub const LOCKOUT_DURATION_MINUTES: i64 = 15;

/// Milliseconds per minute (for remaining-lockout arithmetic)
pub const MILLIS_PER_MINUTE: i64 = 60_000;

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: usize = 8;

// =============================================================================
// Persisted Record Keys
// =============================================================================

/// Key for the single process-wide auth state record
pub const KEY_AUTH_STATE: &str = "auth_state";

/// Key for the registered-users email index
pub const KEY_REGISTERED_USERS: &str = "registered_users";

/// Key for the in-progress registration draft
pub const KEY_DRAFT_REGISTRATION: &str = "draft_registration";

/// Key for the biometric-enabled flag (stored as "true"/"false")
pub const KEY_BIOMETRIC_ENABLED: &str = "biometric_enabled";

/// Key prefix for per-user profile records
pub const KEY_PREFIX_USER: &str = "user:";

/// Key prefix for per-user credential pairs
pub const KEY_PREFIX_CREDENTIALS: &str = "credentials:";
