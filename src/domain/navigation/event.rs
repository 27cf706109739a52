//! NavigationEvent - the wire message consumed by the host application.
//!
//! Wire shape (JSON, UTF-8):
//!
//! ```text
//! {"type":"agent-navigation-url","pathname":"#menu_id=sales.sale_menu_root"}
//! ```

use serde::{Deserialize, Serialize};

use super::target::NavigationTarget;

/// Discriminator the host application matches on.
pub const NAVIGATION_EVENT_TYPE: &str = "agent-navigation-url";

/// Message published to every participant in the room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum NavigationEvent {
    /// Navigate the client to `pathname`.
    #[serde(rename = "agent-navigation-url")]
    NavigationUrl { pathname: NavigationTarget },
}

impl NavigationEvent {
    pub fn navigate(target: NavigationTarget) -> Self {
        NavigationEvent::NavigationUrl { pathname: target }
    }

    pub fn pathname(&self) -> &NavigationTarget {
        match self {
            NavigationEvent::NavigationUrl { pathname } => pathname,
        }
    }

    /// Encodes the event as UTF-8 JSON bytes for the data channel.
    pub fn to_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    /// Decodes an event received from the data channel.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}
