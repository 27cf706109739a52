//! Room transport adapters.

mod broadcast;

pub use broadcast::BroadcastRoom;
