//! SessionContext - the one piece of mutable session state.
//!
//! Holds at most one active room connection. Owned by the agent; never shared
//! across tasks, so no locking.

use std::fmt;
use std::sync::Arc;

use crate::domain::foundation::{RoomName, SessionId};
use crate::ports::{Participant, RoomTransport};

use super::config::SessionConfig;
use super::errors::SessionError;

/// A live connection to a room.
///
/// Cheap to clone: the transport is shared behind an `Arc`.
#[derive(Clone)]
pub struct SessionHandle {
    id: SessionId,
    room: RoomName,
    transport: Arc<dyn RoomTransport>,
    participant: Option<Participant>,
}

impl SessionHandle {
    pub fn new(room: RoomName, transport: Arc<dyn RoomTransport>) -> Self {
        Self {
            id: SessionId::new(),
            room,
            transport,
            participant: None,
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn room(&self) -> &RoomName {
        &self.room
    }

    pub fn transport(&self) -> &Arc<dyn RoomTransport> {
        &self.transport
    }

    /// The participant the agent is serving, once one has joined.
    pub fn participant(&self) -> Option<&Participant> {
        self.participant.as_ref()
    }
}

impl fmt::Debug for SessionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionHandle")
            .field("id", &self.id)
            .field("room", &self.room)
            .field("participant", &self.participant)
            .finish_non_exhaustive()
    }
}

/// Session state for one agent instance.
#[derive(Debug)]
pub struct SessionContext {
    config: SessionConfig,
    active: Option<SessionHandle>,
}

impl SessionContext {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            active: None,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Installs a new connection handle.
    ///
    /// An already active handle is replaced (last writer wins); it is not
    /// disconnected here.
    pub fn begin(&mut self, room: RoomName, transport: Arc<dyn RoomTransport>) -> SessionHandle {
        let handle = SessionHandle::new(room, transport);
        if let Some(prior) = self.active.replace(handle.clone()) {
            tracing::warn!(
                previous = %prior.id(),
                replacement = %handle.id(),
                "Replacing active session handle"
            );
        }
        tracing::debug!(session_id = %handle.id(), room = %handle.room(), "Session started");
        handle
    }

    /// Records the participant the active session is serving.
    pub fn attach_participant(
        &mut self,
        participant: Participant,
    ) -> Result<&SessionHandle, SessionError> {
        let handle = self.active.as_mut().ok_or(SessionError::NoActiveSession)?;
        handle.participant = Some(participant);
        Ok(handle)
    }

    /// Clears the active handle, returning it so the caller can disconnect.
    pub fn end(&mut self) -> Option<SessionHandle> {
        let ended = self.active.take();
        if let Some(handle) = &ended {
            tracing::debug!(session_id = %handle.id(), "Session ended");
        }
        ended
    }

    pub fn active(&self) -> Option<&SessionHandle> {
        self.active.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }
}
