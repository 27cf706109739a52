//! Domain layer containing the agent's core types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (IDs, error codes, state machine trait)
//! - `navigation` - Intents, navigation targets, and the wire event
//! - `session` - Session context and bootstrap lifecycle
//! - `access` - Room access grants for browser clients

pub mod access;
pub mod foundation;
pub mod navigation;
pub mod session;
