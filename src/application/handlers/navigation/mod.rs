//! Navigation handlers.

mod emit_navigation;
mod handle_intent;

pub use emit_navigation::NavigationEmitter;
pub use handle_intent::HandleIntentHandler;
