//! Navigation error types.

use thiserror::Error;

use crate::domain::foundation::ErrorCode;

/// Failure to push a navigation event to the host application.
///
/// Never surfaced to the speech pipeline: the intent handler logs and
/// absorbs it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmitError {
    /// No room connection is held by the session context.
    #[error("No active session to publish navigation on")]
    NoActiveSession,

    /// The transport rejected or failed the publish.
    #[error("Navigation channel failure: {0}")]
    ChannelFailure(String),

    /// The event could not be encoded for the wire.
    #[error("Navigation event encoding failed: {0}")]
    Encoding(String),
}

impl EmitError {
    pub fn code(&self) -> ErrorCode {
        match self {
            EmitError::NoActiveSession => ErrorCode::NoActiveSession,
            EmitError::ChannelFailure(_) => ErrorCode::TransportError,
            EmitError::Encoding(_) => ErrorCode::InternalError,
        }
    }
}

impl From<serde_json::Error> for EmitError {
    fn from(err: serde_json::Error) -> Self {
        EmitError::Encoding(err.to_string())
    }
}

/// A command name from the speech layer that matches no known intent.
///
/// Logged and ignored by the agent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unrecognized intent: {0}")]
pub struct UnrecognizedIntent(pub String);

impl UnrecognizedIntent {
    pub fn code(&self) -> ErrorCode {
        ErrorCode::UnknownIntent
    }
}
