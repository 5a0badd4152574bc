//! Application settings loaded from environment variables.

use std::env;

use super::constants::{LOCKOUT_DURATION_MINUTES, MAX_FAILED_LOGIN_ATTEMPTS};

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Failed login attempts allowed before lockout
    pub max_failed_attempts: u32,
    /// Lockout window in minutes
    pub lockout_minutes: i64,
}

impl Config {
    /// Load configuration from environment variables, falling back to the
    /// documented defaults for anything unset or unparseable.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            max_failed_attempts: env::var("SIGNON_MAX_FAILED_ATTEMPTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(MAX_FAILED_LOGIN_ATTEMPTS),
            lockout_minutes: env::var("SIGNON_LOCKOUT_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(LOCKOUT_DURATION_MINUTES),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_failed_attempts: MAX_FAILED_LOGIN_ATTEMPTS,
            lockout_minutes: LOCKOUT_DURATION_MINUTES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_documented_policy() {
        let config = Config::default();
        assert_eq!(config.max_failed_attempts, 5);
        assert_eq!(config.lockout_minutes, 15);
    }
}
