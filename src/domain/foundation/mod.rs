//! Foundation module - Shared domain primitives.
//!
//! Identifiers, error vocabulary, and the state machine trait used by the
//! navigation and session modules.

mod errors;
mod ids;
mod state_machine;

pub use errors::{ErrorCode, ValidationError};
pub use ids::{ParticipantIdentity, RoomName, SessionId};
pub use state_machine::StateMachine;
