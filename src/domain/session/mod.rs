//! Session module - the agent's connection lifecycle.
//!
//! - `SessionConfig` - transport URL, credentials, host application URL
//! - `SessionContext` / `SessionHandle` - at most one live room connection
//! - `BootstrapPhase` - `Idle -> Connecting -> AwaitingParticipant -> Greeted -> Active`
//! - `AgentInstructions` - system prompt, loaded from file with a fallback

mod config;
mod context;
mod errors;
mod instructions;
mod phase;

pub use config::SessionConfig;
pub use context::{SessionContext, SessionHandle};
pub use errors::SessionError;
pub use instructions::{AgentInstructions, DEFAULT_GREETING, DEFAULT_INSTRUCTIONS};
pub use phase::BootstrapPhase;
