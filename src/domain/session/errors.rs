//! Session-specific error types.

use crate::domain::foundation::{ErrorCode, ValidationError};
use crate::ports::{SpeechError, TransportError};

/// Errors that stop a session from reaching `Active`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// The transport refused the connection.
    #[error("Failed to connect to room: {0}")]
    ConnectFailed(TransportError),

    /// The room closed before anyone joined.
    #[error("No participant joined: {0}")]
    ParticipantUnavailable(TransportError),

    /// The speech pipeline could not be started.
    #[error("Speech pipeline failed to start: {0}")]
    SpeechUnavailable(SpeechError),

    /// A lifecycle step was attempted out of order.
    #[error("Invalid session state: {0}")]
    InvalidState(#[from] ValidationError),

    /// An operation needed a connection and none is held.
    #[error("No active session")]
    NoActiveSession,
}

impl SessionError {
    pub fn code(&self) -> ErrorCode {
        match self {
            SessionError::ConnectFailed(_) | SessionError::ParticipantUnavailable(_) => {
                ErrorCode::TransportError
            }
            SessionError::SpeechUnavailable(_) => ErrorCode::SpeechError,
            SessionError::InvalidState(_) => ErrorCode::InvalidStateTransition,
            SessionError::NoActiveSession => ErrorCode::NoActiveSession,
        }
    }
}
