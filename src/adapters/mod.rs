//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `room` - in-process broadcast room (`RoomTransport`)
//! - `speech` - scripted speech pipeline (`SpeechPipeline`)
//! - `auth` - HS256 access-token signing (`AccessTokenIssuer`)
//! - `http` - token and health endpoints (axum)

pub mod auth;
pub mod http;
pub mod room;
pub mod speech;

pub use auth::JwtAccessTokenIssuer;
pub use room::BroadcastRoom;
pub use speech::ScriptedSpeechPipeline;
