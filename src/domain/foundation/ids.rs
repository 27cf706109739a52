//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::ValidationError;

/// Unique identifier for one agent session (one room connection).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Creates a new random SessionId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Name of a real-time room on the transport.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomName(String);

impl RoomName {
    /// Creates a room name, rejecting blank input.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("room_name"));
        }
        Ok(Self(name))
    }

    /// Room name for a host-application user at a given unix time.
    ///
    /// Format: `voice_<user_id>_<unix_seconds>`.
    pub fn for_user(user_id: &str, unix_seconds: i64) -> Result<Self, ValidationError> {
        if user_id.trim().is_empty() {
            return Err(ValidationError::empty_field("user_id"));
        }
        Self::new(format!("voice_{}_{}", user_id, unix_seconds))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity of a participant connected to a room.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantIdentity(String);

impl ParticipantIdentity {
    /// Creates a participant identity, returning error if empty.
    pub fn new(identity: impl Into<String>) -> Result<Self, ValidationError> {
        let identity = identity.into();
        if identity.is_empty() {
            return Err(ValidationError::empty_field("participant_identity"));
        }
        Ok(Self(identity))
    }

    /// Display name for a user, falling back to `User<id>` when the name is blank.
    pub fn for_user(user_id: &str, user_name: Option<&str>) -> Result<Self, ValidationError> {
        match user_name.map(str::trim).filter(|n| !n.is_empty()) {
            Some(name) => Self::new(name),
            None if user_id.trim().is_empty() => Err(ValidationError::empty_field("user_id")),
            None => Self::new(format!("User{}", user_id)),
        }
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParticipantIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_ids_are_unique() {
        assert_ne!(SessionId::new(), SessionId::new());
    }

    #[test]
    fn session_id_parses_its_display_form() {
        let id = SessionId::new();
        let parsed: SessionId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn room_name_rejects_blank() {
        assert!(RoomName::new("   ").is_err());
        assert!(RoomName::new("").is_err());
    }

    #[test]
    fn room_name_for_user_uses_voice_prefix() {
        let room = RoomName::for_user("42", 1_700_000_000).unwrap();
        assert_eq!(room.as_str(), "voice_42_1700000000");
    }

    #[test]
    fn participant_uses_user_name_when_present() {
        let identity = ParticipantIdentity::for_user("7", Some("Mitchell Admin")).unwrap();
        assert_eq!(identity.as_str(), "Mitchell Admin");
    }

    #[test]
    fn participant_falls_back_to_user_id() {
        let identity = ParticipantIdentity::for_user("7", None).unwrap();
        assert_eq!(identity.as_str(), "User7");

        let identity = ParticipantIdentity::for_user("7", Some("  ")).unwrap();
        assert_eq!(identity.as_str(), "User7");
    }

    #[test]
    fn participant_requires_some_identity() {
        assert!(ParticipantIdentity::for_user("", None).is_err());
        assert!(ParticipantIdentity::new("").is_err());
    }
}
