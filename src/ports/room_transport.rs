//! RoomTransport port - the real-time room the agent joins.
//!
//! The transport owns media, participants, and the data channel the host
//! application listens on. The agent only needs four primitives from it.

use async_trait::async_trait;
use url::Url;

use crate::domain::access::TransportCredentials;
use crate::domain::foundation::{ParticipantIdentity, RoomName};

/// Delivery guarantee requested for a data-channel publish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataDelivery {
    /// Ordered, retransmitted; at-least-once.
    Reliable,
    /// Best effort.
    Lossy,
}

/// Which remote tracks the agent subscribes to on join.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AutoSubscribe {
    #[default]
    AudioOnly,
    SubscribeAll,
    SubscribeNone,
}

/// Parameters for joining a room.
#[derive(Debug, Clone)]
pub struct ConnectOptions {
    pub url: Url,
    pub room: RoomName,
    pub credentials: TransportCredentials,
    pub auto_subscribe: AutoSubscribe,
}

/// A remote participant observed in the room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub identity: ParticipantIdentity,
    pub name: Option<String>,
}

impl Participant {
    pub fn new(identity: ParticipantIdentity) -> Self {
        Self {
            identity,
            name: None,
        }
    }
}

/// Errors reported by a transport.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("Connection failed: {0}")]
    ConnectFailed(String),

    #[error("Transport is not connected")]
    NotConnected,

    #[error("Publish failed: {0}")]
    PublishFailed(String),

    #[error("Room closed")]
    Closed,
}

/// Port for the real-time room.
///
/// Implementations must ensure:
/// - `wait_for_participant` suspends until a remote participant is present
/// - `publish_data` with `DataDelivery::Reliable` reaches every connected
///   participant at least once, or returns an error
#[async_trait]
pub trait RoomTransport: Send + Sync {
    /// Join the room.
    async fn connect(&self, options: &ConnectOptions) -> Result<(), TransportError>;

    /// Suspend until one remote participant has joined, and return it.
    async fn wait_for_participant(&self) -> Result<Participant, TransportError>;

    /// Broadcast a payload to every participant.
    async fn publish_data(
        &self,
        payload: Vec<u8>,
        delivery: DataDelivery,
    ) -> Result<(), TransportError>;

    /// Leave the room.
    async fn disconnect(&self) -> Result<(), TransportError>;
}
