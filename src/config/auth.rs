//! Authentication configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::server::Environment;

/// Authentication configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Shared secret granting elevated registration defaults
    #[serde(default = "default_admin_token")]
    pub admin_registration_token: Secret<String>,

    /// Credential storage/verification mode
    #[serde(default)]
    pub password_mode: PasswordMode,

    /// Session cookie max-age in seconds (also the session idle window)
    #[serde(default = "default_cookie_max_age")]
    pub cookie_max_age_secs: u64,
}

/// How credentials are stored and compared.
///
/// `Plain` keeps the password verbatim so the external game server can read
/// it; `Hashed` stores a salted digest and breaks that interop.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PasswordMode {
    #[default]
    Plain,
    Hashed,
}

impl AuthConfig {
    /// Get the session idle window as Duration
    pub fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.cookie_max_age_secs)
    }

    /// Validate authentication configuration
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.cookie_max_age_secs == 0 {
            return Err(ValidationError::InvalidCookieMaxAge);
        }
        if *environment == Environment::Production
            && self.admin_registration_token.expose_secret().is_empty()
        {
            return Err(ValidationError::MissingAdminToken);
        }
        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            admin_registration_token: default_admin_token(),
            password_mode: PasswordMode::default(),
            cookie_max_age_secs: default_cookie_max_age(),
        }
    }
}

fn default_admin_token() -> Secret<String> {
    Secret::new(String::new())
}

fn default_cookie_max_age() -> u64 {
    3600
}
