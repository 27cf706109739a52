//! Token service listener settings
//!
//! Read from `VOICE_NAVIGATOR__SERVER__*`. The router takes its timeout and
//! allowed origins from here, so both are checked once at startup.

use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use url::Url;

use super::error::ValidationError;

/// Token requests only sign a JWT; anything slower than this is stuck.
const MAX_REQUEST_TIMEOUT_SECS: u64 = 60;

/// Listener, logging, and CORS settings for the token service
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// IP address to bind (IPv4 or IPv6 literal)
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub environment: Environment,

    /// `EnvFilter` directive used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Upper bound on one token request, in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Comma-separated origins allowed to call the token endpoint.
    /// Any origin when unset.
    pub cors_origins: Option<String>,
}

/// Deployment environment; production demands a secure transport URL
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ValidationError> {
        self.host
            .parse::<IpAddr>()
            .map(|ip| SocketAddr::new(ip, self.port))
            .map_err(|_| ValidationError::InvalidSocketAddr(self.host.clone()))
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Allowed CORS origins in `scheme://host[:port]` form.
    ///
    /// Empty when unset, which the router reads as "any origin". Paths and
    /// trailing slashes are dropped; blank entries are skipped.
    pub fn allowed_origins(&self) -> Result<Vec<String>, ValidationError> {
        let Some(raw) = self.cors_origins.as_deref() else {
            return Ok(Vec::new());
        };

        raw.split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(|entry| {
                let invalid = || ValidationError::InvalidCorsOrigin(entry.to_string());
                let url = Url::parse(entry).map_err(|_| invalid())?;
                if !matches!(url.scheme(), "http" | "https") || !url.has_host() {
                    return Err(invalid());
                }
                Ok(url.origin().ascii_serialization())
            })
            .collect()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        if !(1..=MAX_REQUEST_TIMEOUT_SECS).contains(&self.request_timeout_secs) {
            return Err(ValidationError::InvalidTimeout);
        }
        self.socket_addr()?;
        self.allowed_origins()?;
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
    8080
}

fn default_log_level() -> String {
    "info,voice_navigator=debug".to_string()
}

fn default_request_timeout() -> u64 {
    10
}
