//! Application layer - the voice agent and its handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

mod agent;
pub mod handlers;

pub use agent::{InterruptHandle, VoiceAgent};
pub use handlers::{
    BootstrapSequencer, HandleIntentHandler, IssueAccessTokenCommand, IssueAccessTokenHandler,
    NavigationEmitter,
};
