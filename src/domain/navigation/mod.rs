//! Navigation module - voice intents and the navigation events they produce.
//!
//! - `Intent` - closed set of recognized commands
//! - `IntentRegistry` - static intent -> target table
//! - `NavigationTarget` - normalized `#fragment` destination
//! - `NavigationEvent` - `{type, pathname}` wire message

mod errors;
mod event;
mod intent;
mod registry;
mod target;

pub use errors::{EmitError, UnrecognizedIntent};
pub use event::{NavigationEvent, NAVIGATION_EVENT_TYPE};
pub use intent::Intent;
pub use registry::{
    ClarificationMessage, IntentOutcome, IntentRegistry, ToolDescriptor, WHERE_AM_I_REPLY,
};
pub use target::{NavigationTarget, FRAGMENT_MARKER};
