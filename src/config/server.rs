//! HTTP listener configuration.

use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};

use super::error::ValidationError;

/// Listener settings for the gateway.
///
/// `host` must be an IP literal; the gateway binds directly rather than
/// resolving names.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub environment: Environment,

    /// Log filter directive for `tracing_subscriber`
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// CORS allowed origins (comma-separated)
    pub cors_origins: Option<String>,
}

/// Deployment environment.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl ServerConfig {
    /// Bind address. Fails when `host` is not an IP literal.
    pub fn socket_addr(&self) -> Result<SocketAddr, ValidationError> {
        let host: IpAddr = self
            .host
            .parse()
            .map_err(|_| ValidationError::InvalidHost)?;
        Ok(SocketAddr::new(host, self.port))
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// CORS origins as a list.
    pub fn cors_origins_list(&self) -> Vec<String> {
        self.cors_origins
            .as_ref()
            .map(|s| s.split(',').map(|s| s.trim().to_string()).collect())
            .unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        self.socket_addr()?;
        if self.request_timeout_secs == 0 || self.request_timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            environment: Environment::default(),
            log_level: default_log_level(),
            request_timeout_secs: default_request_timeout(),
            cors_origins: None,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_log_level() -> String {
    "info,account_gateway=debug,sqlx=warn".to_string()
}

fn default_request_timeout() -> u64 {
    30
}
