//! Ports - Interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `RoomTransport` - real-time room: connect, participants, data channel
//! - `SpeechPipeline` - recognition, tool calls, and speech synthesis
//! - `AccessTokenIssuer` - signs room access grants for browser clients

mod access_token_issuer;
mod room_transport;
mod speech_pipeline;

pub use access_token_issuer::AccessTokenIssuer;
pub use room_transport::{
    AutoSubscribe, ConnectOptions, DataDelivery, Participant, RoomTransport, TransportError,
};
pub use speech_pipeline::{AgentPrompt, SpeechError, SpeechOutcome, SpeechPipeline};
