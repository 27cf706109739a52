//! In-process room that broadcasts to a bounded queue per client.
//!
//! Every joined client receives every published payload, which is the same
//! fan-out contract a hosted real-time room gives the agent. Used for local
//! runs and tests; hosted transports implement the same port.
//!
//! # Architecture
//!
//! ```text
//!                 publish_data
//! agent ──────────────► clients: Vec<mpsc::Sender<Vec<u8>>>
//!                          ├── client-a (mpsc::Receiver)
//!                          └── client-b (mpsc::Receiver)
//! ```
//!
//! A reliable publish reserves a slot in every client queue before sending
//! anything. When one queue is full the publish fails and no client gets the
//! payload. A lossy publish skips full queues.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::sync::{mpsc, watch, RwLock};

use crate::domain::foundation::{ParticipantIdentity, RoomName};
use crate::ports::{
    ConnectOptions, DataDelivery, Participant, RoomTransport, TransportError,
};

#[derive(Debug, Default)]
struct Presence {
    participants: Vec<Participant>,
    clients: Vec<mpsc::Sender<Vec<u8>>>,
    closed: bool,
}

/// Single room whose data channel fans out to every joined client.
pub struct BroadcastRoom {
    capacity: usize,
    presence: watch::Sender<Presence>,
    connected_room: RwLock<Option<RoomName>>,
    connected: AtomicBool,
    published: AtomicU64,
}

impl BroadcastRoom {
    /// Create a room whose per-client buffer holds `capacity` payloads.
    pub fn new(capacity: usize) -> Self {
        let (presence, _) = watch::channel(Presence::default());
        Self {
            capacity: capacity.max(1),
            presence,
            connected_room: RwLock::new(None),
            connected: AtomicBool::new(false),
            published: AtomicU64::new(0),
        }
    }

    /// Create with default capacity (64 payloads).
    pub fn with_default_capacity() -> Self {
        Self::new(64)
    }

    /// Join a client and return its receiver for data-channel payloads.
    pub fn join(&self, identity: ParticipantIdentity) -> mpsc::Receiver<Vec<u8>> {
        let (sender, receiver) = mpsc::channel(self.capacity);
        tracing::debug!(participant = %identity, "Participant joined room");
        self.presence.send_modify(|presence| {
            presence.participants.push(Participant::new(identity));
            presence.clients.push(sender);
        });
        receiver
    }

    /// Close the room: pending and future waits fail, publishes are refused.
    pub fn close(&self) {
        self.presence.send_modify(|presence| presence.closed = true);
    }

    /// Room name the agent connected with, if connected.
    pub async fn connected_room(&self) -> Option<RoomName> {
        self.connected_room.read().await.clone()
    }

    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    /// Number of payloads handed to the channel so far.
    pub fn published_count(&self) -> u64 {
        self.published.load(Ordering::SeqCst)
    }

    pub fn participant_count(&self) -> usize {
        self.presence.borrow().participants.len()
    }

    fn is_closed(&self) -> bool {
        self.presence.borrow().closed
    }
}

impl Default for BroadcastRoom {
    fn default() -> Self {
        Self::with_default_capacity()
    }
}

#[async_trait]
impl RoomTransport for BroadcastRoom {
    async fn connect(&self, options: &ConnectOptions) -> Result<(), TransportError> {
        if self.is_closed() {
            return Err(TransportError::ConnectFailed("room is closed".to_string()));
        }
        *self.connected_room.write().await = Some(options.room.clone());
        self.connected.store(true, Ordering::SeqCst);
        tracing::debug!(room = %options.room, url = %options.url, "Connected to broadcast room");
        Ok(())
    }

    async fn wait_for_participant(&self) -> Result<Participant, TransportError> {
        if !self.is_connected() {
            return Err(TransportError::NotConnected);
        }

        let mut presence = self.presence.subscribe();
        loop {
            {
                let current = presence.borrow_and_update();
                if let Some(participant) = current.participants.first() {
                    return Ok(participant.clone());
                }
                if current.closed {
                    return Err(TransportError::Closed);
                }
            }
            if presence.changed().await.is_err() {
                return Err(TransportError::Closed);
            }
        }
    }

    async fn publish_data(
        &self,
        payload: Vec<u8>,
        delivery: DataDelivery,
    ) -> Result<(), TransportError> {
        if !self.is_connected() {
            return Err(TransportError::NotConnected);
        }
        if self.is_closed() {
            return Err(TransportError::Closed);
        }

        let mut outcome = Ok(0);
        self.presence.send_if_modified(|presence| {
            let before = presence.clients.len();
            presence.clients.retain(|client| !client.is_closed());
            outcome = deliver(&presence.clients, &payload, delivery);
            presence.clients.len() != before
        });

        let receivers = outcome?;
        self.published.fetch_add(1, Ordering::SeqCst);
        tracing::trace!(receivers, ?delivery, "Published data payload");
        Ok(())
    }

    async fn disconnect(&self) -> Result<(), TransportError> {
        self.connected.store(false, Ordering::SeqCst);
        *self.connected_room.write().await = None;
        Ok(())
    }
}

fn deliver(
    clients: &[mpsc::Sender<Vec<u8>>],
    payload: &[u8],
    delivery: DataDelivery,
) -> Result<usize, TransportError> {
    if clients.is_empty() {
        return Err(TransportError::PublishFailed(
            "no participants subscribed".to_string(),
        ));
    }

    match delivery {
        DataDelivery::Reliable => {
            let permits = clients
                .iter()
                .map(|client| client.try_reserve())
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| {
                    TransportError::PublishFailed(format!("participant queue unavailable: {}", e))
                })?;
            let receivers = permits.len();
            for permit in permits {
                permit.send(payload.to_vec());
            }
            Ok(receivers)
        }
        DataDelivery::Lossy => Ok(clients
            .iter()
            .filter(|client| client.try_send(payload.to_vec()).is_ok())
            .count()),
    }
}
