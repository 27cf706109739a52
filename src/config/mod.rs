//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `VOICE_NAVIGATOR` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use voice_navigator::config::AppConfig;
//!
//! let config = AppConfig::load()?;
//! config.validate()?;
//!
//! println!("Server running on {}", config.server.socket_addr()?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod agent;
mod error;
mod server;
mod transport;

pub use agent::AgentConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};
pub use transport::TransportConfig;

use serde::Deserialize;

use crate::domain::session::SessionConfig;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Real-time transport (URL and API credentials)
    pub transport: TransportConfig,

    /// Agent behavior (host application, greeting, prompt)
    #[serde(default)]
    pub agent: AgentConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `VOICE_NAVIGATOR` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `VOICE_NAVIGATOR__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `VOICE_NAVIGATOR__TRANSPORT__URL=...` -> `transport.url = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Required environment variables are missing
    /// - Values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("VOICE_NAVIGATOR")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.transport.validate(&self.server.environment)?;
        self.agent.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }

    /// Connection settings for one agent session
    pub fn session_config(&self) -> Result<SessionConfig, ValidationError> {
        Ok(SessionConfig::new(
            self.transport.parsed_url()?,
            self.transport.credentials(),
            self.agent.host_url()?,
        ))
    }
}
