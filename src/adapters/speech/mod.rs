//! Speech pipeline adapters.

mod scripted;

pub use scripted::{ScriptedSpeechPipeline, SpokenLine};
