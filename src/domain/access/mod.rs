//! Access module - room access grants for browser clients.
//!
//! The host application asks for a token before its client joins the room
//! the agent listens on. The grant is plain data; signing lives behind the
//! `AccessTokenIssuer` port.

use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::domain::foundation::{ErrorCode, ParticipantIdentity, RoomName, ValidationError};

/// API key/secret pair for the real-time transport.
pub struct TransportCredentials {
    pub api_key: String,
    pub api_secret: Secret<String>,
}

impl TransportCredentials {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: Secret::new(api_secret.into()),
        }
    }

    /// True when both halves are present.
    pub fn is_complete(&self) -> bool {
        !self.api_key.is_empty() && !self.api_secret.expose_secret().is_empty()
    }
}

impl Clone for TransportCredentials {
    fn clone(&self) -> Self {
        Self {
            api_key: self.api_key.clone(),
            api_secret: Secret::new(self.api_secret.expose_secret().clone()),
        }
    }
}

impl std::fmt::Debug for TransportCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransportCredentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}

/// Room permissions embedded in an access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoGrant {
    pub room_join: bool,
    pub room: String,
    pub can_publish: bool,
    pub can_subscribe: bool,
}

impl VideoGrant {
    /// Join, publish and subscribe in one room.
    pub fn join(room: &RoomName) -> Self {
        Self {
            room_join: true,
            room: room.to_string(),
            can_publish: true,
            can_subscribe: true,
        }
    }
}

/// Everything needed to mint a token for one participant.
#[derive(Debug, Clone)]
pub struct AccessGrant {
    pub identity: ParticipantIdentity,
    pub room: RoomName,
    pub video: VideoGrant,
    pub ttl: Duration,
}

impl AccessGrant {
    pub fn new(identity: ParticipantIdentity, room: RoomName, ttl: Duration) -> Self {
        let video = VideoGrant::join(&room);
        Self {
            identity,
            room,
            video,
            ttl,
        }
    }
}

/// Token plus the connection details a browser client needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedAccessToken {
    pub token: String,
    pub url: String,
    pub room: String,
    pub participant: String,
}

/// Errors minting an access token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("Transport credentials are not configured")]
    MissingCredentials,

    #[error("Invalid token request: {0}")]
    InvalidRequest(#[from] ValidationError),

    #[error("Token signing failed: {0}")]
    Signing(String),
}

impl TokenError {
    pub fn code(&self) -> ErrorCode {
        match self {
            TokenError::MissingCredentials => ErrorCode::TokenError,
            TokenError::InvalidRequest(_) => ErrorCode::ValidationFailed,
            TokenError::Signing(_) => ErrorCode::TokenError,
        }
    }
}
