//! Session handlers.

mod bootstrap_session;

pub use bootstrap_session::BootstrapSequencer;
