//! Voice Navigator - voice-driven navigation for a web application
//!
//! A voice agent joins a real-time room next to the user's browser session.
//! Recognized intents ("open sales", "go home") resolve to in-app route
//! fragments, which are pushed to the browser as `agent-navigation-url`
//! events over the room's reliable data channel.
//!
//! Layout follows hexagonal architecture:
//! - `domain` - intents, navigation targets, session lifecycle, access grants
//! - `ports` - room transport, speech pipeline, token issuer
//! - `application` - the voice agent and its handlers
//! - `adapters` - in-process room, scripted speech, JWT signing, HTTP
//! - `config` - environment-driven configuration

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
