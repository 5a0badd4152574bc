//! The process-wide authentication state record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::MILLIS_PER_MINUTE;
use crate::domain::User;

/// Persisted authentication state.
///
/// At most one record exists per installation; it is the sole source of
/// truth for "who is currently signed in" and for lockout accounting.
/// The failed-attempt counter is shared across all emails on the device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthState {
    pub is_authenticated: bool,
    pub user: Option<User>,
    pub failed_login_attempts: u32,
    pub is_locked_out: bool,
    pub lockout_until: Option<DateTime<Utc>>,
}

impl AuthState {
    /// State after a successful login: counters reset, lockout cleared.
    pub fn signed_in(user: User) -> Self {
        Self {
            is_authenticated: true,
            user: Some(user),
            failed_login_attempts: 0,
            is_locked_out: false,
            lockout_until: None,
        }
    }

    /// State after a failed login attempt.
    ///
    /// `lockout_until` is `Some` exactly when this failure crossed the
    /// lockout threshold.
    pub fn failed(attempts: u32, lockout_until: Option<DateTime<Utc>>) -> Self {
        Self {
            is_authenticated: false,
            user: None,
            failed_login_attempts: attempts,
            is_locked_out: lockout_until.is_some(),
            lockout_until,
        }
    }

    /// Whether the lockout is still in force at `now`.
    ///
    /// Strict comparison: exactly at `lockout_until` the lockout is over
    /// and a login attempt proceeds to verification. A set flag with no
    /// timestamp is treated as expired.
    pub fn lockout_active(&self, now: DateTime<Utc>) -> bool {
        match (self.is_locked_out, self.lockout_until) {
            (true, Some(until)) => now < until,
            _ => false,
        }
    }

    /// Whole minutes left on the lockout, rounded up.
    ///
    /// Returns 0 when no lockout is in force at `now`.
    pub fn remaining_lockout_minutes(&self, now: DateTime<Utc>) -> i64 {
        if !self.lockout_active(now) {
            return 0;
        }
        let remaining_ms = self
            .lockout_until
            .map(|until| (until - now).num_milliseconds())
            .unwrap_or(0);
        (remaining_ms + MILLIS_PER_MINUTE - 1) / MILLIS_PER_MINUTE
    }
}
