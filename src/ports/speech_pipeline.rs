//! SpeechPipeline port - speech recognition, language model, and synthesis.
//!
//! The pipeline turns user speech into tool-call command names (one per
//! recognized utterance) and speaks the agent's replies. Voice activity
//! detection and barge-in are its concern, not the agent's.

use async_trait::async_trait;

use crate::domain::navigation::ToolDescriptor;

/// System prompt plus the tools the language model may call.
#[derive(Debug, Clone)]
pub struct AgentPrompt {
    pub instructions: String,
    pub tools: Vec<ToolDescriptor>,
}

/// How a `say` call ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeechOutcome {
    Completed,
    /// The user started speaking and playback was cut.
    Interrupted,
}

/// Errors reported by the speech pipeline.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpeechError {
    #[error("Speech pipeline not started")]
    NotStarted,

    #[error("Speech synthesis failed: {0}")]
    Synthesis(String),

    #[error("Interrupt failed: {0}")]
    Interrupt(String),

    #[error("Speech pipeline unavailable: {0}")]
    Unavailable(String),
}

/// Port for the speech/LLM pipeline.
#[async_trait]
pub trait SpeechPipeline: Send + Sync {
    /// Load the prompt and tool set; must precede every other call.
    async fn start(&self, prompt: &AgentPrompt) -> Result<(), SpeechError>;

    /// Speak `text`. With `allow_interruptions`, user speech may cut it short.
    async fn say(&self, text: &str, allow_interruptions: bool)
        -> Result<SpeechOutcome, SpeechError>;

    /// Best-effort request to stop current playback.
    async fn interrupt(&self) -> Result<(), SpeechError>;

    /// Next tool name the language model called, or `None` once the
    /// pipeline has shut down.
    async fn next_command(&self) -> Option<String>;

    /// Return the tool result for `command` to the language model.
    async fn complete_command(&self, command: &str, result: &str) -> Result<(), SpeechError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn SpeechPipeline) {}

    #[test]
    fn speech_error_messages() {
        assert_eq!(SpeechError::NotStarted.to_string(), "Speech pipeline not started");
    }
}
