//! Application handlers.
//!
//! Each handler orchestrates one operation over domain types and ports.

pub mod access;
pub mod navigation;
pub mod session;

pub use access::{IssueAccessTokenCommand, IssueAccessTokenHandler};
pub use navigation::{HandleIntentHandler, NavigationEmitter};
pub use session::BootstrapSequencer;
