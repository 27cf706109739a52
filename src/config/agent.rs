//! Voice agent configuration

use serde::Deserialize;
use std::path::PathBuf;
use url::Url;

use super::error::ValidationError;
use crate::domain::session::{AgentInstructions, DEFAULT_GREETING};

/// Agent behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AgentConfig {
    /// Base URL of the host application being navigated
    #[serde(default = "default_host_base_url")]
    pub host_base_url: String,

    /// Greeting spoken once a participant joins
    #[serde(default = "default_greeting")]
    pub greeting: String,

    /// File holding the system prompt; built-in prompt when unset
    pub instructions_path: Option<PathBuf>,
}

impl AgentConfig {
    /// Parse the host application URL
    pub fn host_url(&self) -> Result<Url, ValidationError> {
        Url::parse(&self.host_base_url).map_err(|e| ValidationError::InvalidHostUrl(e.to_string()))
    }

    /// Load the system prompt, falling back to the built-in one
    pub fn instructions(&self) -> AgentInstructions {
        AgentInstructions::load(self.instructions_path.as_deref())
    }

    /// Validate agent configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let url = self.host_url()?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ValidationError::InvalidHostUrl(format!(
                "unsupported scheme '{}'",
                url.scheme()
            )));
        }
        if self.greeting.trim().is_empty() {
            return Err(ValidationError::MissingRequired("AGENT__GREETING"));
        }
        Ok(())
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            host_base_url: default_host_base_url(),
            greeting: default_greeting(),
            instructions_path: None,
        }
    }
}

fn default_host_base_url() -> String {
    "http://localhost:8069".to_string()
}

fn default_greeting() -> String {
    DEFAULT_GREETING.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::session::DEFAULT_INSTRUCTIONS;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AgentConfig::default();
        assert_eq!(config.host_base_url, "http://localhost:8069");
        assert_eq!(config.greeting, DEFAULT_GREETING);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_host_url() {
        let config = AgentConfig {
            host_base_url: "not a url".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ValidationError::InvalidHostUrl(_))));
    }

    #[test]
    fn test_non_http_host_url() {
        let config = AgentConfig {
            host_base_url: "ws://localhost:8069".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_blank_greeting() {
        let config = AgentConfig {
            greeting: "   ".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("AGENT__GREETING"))
        );
    }

    #[test]
    fn test_instructions_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Only navigate, never chat.").unwrap();
        let config = AgentConfig {
            instructions_path: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        assert_eq!(config.instructions().as_str(), "Only navigate, never chat.");
    }

    #[test]
    fn test_instructions_fallback() {
        let config = AgentConfig::default();
        assert_eq!(config.instructions().as_str(), DEFAULT_INSTRUCTIONS);
    }
}
