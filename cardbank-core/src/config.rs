//! Configuration management
//!
//! Nothing is read from disk: the CLI builds a [`BankConfig`] from its flags
//! and everything else falls back to the defaults below.

use std::time::Duration;

use crate::domain::result::{Error, Result};

/// Login attempts allowed before returning to the main menu
pub const DEFAULT_MAX_LOGIN_ATTEMPTS: u32 = 3;

/// Pause after every failed login attempt, to slow down PIN guessing
pub const DEFAULT_FAILED_LOGIN_DELAY: Duration = Duration::from_secs(2);

/// Banking system configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankConfig {
    pub max_login_attempts: u32,
    pub failed_login_delay: Duration,
}

impl Default for BankConfig {
    fn default() -> Self {
        Self {
            max_login_attempts: DEFAULT_MAX_LOGIN_ATTEMPTS,
            failed_login_delay: DEFAULT_FAILED_LOGIN_DELAY,
        }
    }
}

impl BankConfig {
    /// Override the number of login attempts
    pub fn with_max_login_attempts(mut self, attempts: u32) -> Self {
        self.max_login_attempts = attempts;
        self
    }

    /// Override the pause after a failed login
    pub fn with_failed_login_delay(mut self, delay: Duration) -> Self {
        self.failed_login_delay = delay;
        self
    }

    /// Reject settings that would make logging in impossible
    pub fn validate(&self) -> Result<()> {
        if self.max_login_attempts == 0 {
            return Err(Error::config("max_login_attempts must be at least 1"));
        }
        Ok(())
    }
}
