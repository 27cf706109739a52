//! Real-time transport configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;
use url::Url;

use super::error::ValidationError;
use super::server::Environment;
use crate::domain::access::TransportCredentials;

/// Longest token lifetime accepted (24 hours)
const MAX_TOKEN_TTL_SECS: u64 = 24 * 60 * 60;

/// Transport configuration (hosted real-time room server)
#[derive(Debug, Deserialize)]
pub struct TransportConfig {
    /// Server URL, e.g. `wss://example.livekit.cloud`
    pub url: String,

    /// API key; also the token issuer
    pub api_key: String,

    /// API secret used to sign access tokens
    pub api_secret: Secret<String>,

    /// Lifetime of issued access tokens in seconds
    #[serde(default = "default_token_ttl")]
    pub token_ttl_secs: u64,
}

impl TransportConfig {
    /// Parse the server URL
    pub fn parsed_url(&self) -> Result<Url, ValidationError> {
        Url::parse(&self.url).map_err(|e| ValidationError::InvalidTransportUrl(e.to_string()))
    }

    /// Credentials for connecting and signing
    pub fn credentials(&self) -> TransportCredentials {
        TransportCredentials::new(self.api_key.clone(), self.api_secret.expose_secret().clone())
    }

    pub fn token_ttl(&self) -> Duration {
        Duration::from_secs(self.token_ttl_secs)
    }

    /// Validate transport configuration
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.url.is_empty() {
            return Err(ValidationError::MissingRequired("TRANSPORT__URL"));
        }
        if self.api_key.is_empty() {
            return Err(ValidationError::MissingRequired("TRANSPORT__API_KEY"));
        }
        if self.api_secret.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("TRANSPORT__API_SECRET"));
        }

        let url = self.parsed_url()?;
        match url.scheme() {
            "wss" | "https" => {}
            "ws" | "http" => {
                if *environment == Environment::Production {
                    return Err(ValidationError::TransportMustBeSecure);
                }
            }
            other => {
                return Err(ValidationError::InvalidTransportUrl(format!(
                    "unsupported scheme '{}'",
                    other
                )))
            }
        }

        if self.token_ttl_secs == 0 || self.token_ttl_secs > MAX_TOKEN_TTL_SECS {
            return Err(ValidationError::InvalidTokenTtl);
        }
        Ok(())
    }
}

fn default_token_ttl() -> u64 {
    6 * 60 * 60
}
