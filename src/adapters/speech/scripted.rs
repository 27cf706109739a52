//! Scripted speech pipeline for tests and local runs.
//!
//! Replays a fixed list of tool-call command names and records everything
//! the agent says, so agent behavior can be asserted without audio.
//!
//! # Example
//!
//! ```ignore
//! let speech = ScriptedSpeechPipeline::new()
//!     .with_commands(["navigate_to_sales", "where_am_i"]);
//!
//! agent.run(room).await?;
//! assert_eq!(speech.spoken().await.len(), 1); // the greeting
//! ```

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::{Mutex, Notify};

use crate::ports::{AgentPrompt, SpeechError, SpeechOutcome, SpeechPipeline};

/// One `say` call as observed by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpokenLine {
    pub text: String,
    pub allow_interruptions: bool,
}

/// Speech pipeline that plays back a script.
#[derive(Debug)]
pub struct ScriptedSpeechPipeline {
    commands: Mutex<VecDeque<String>>,
    prompt: Mutex<Option<AgentPrompt>>,
    spoken: Mutex<Vec<SpokenLine>>,
    results: Mutex<Vec<(String, String)>>,
    say_outcome: SpeechOutcome,
    say_error: Option<SpeechError>,
    interrupt_error: Option<SpeechError>,
    interrupts: AtomicUsize,
    hold_playback: bool,
    stop_playback: Notify,
}

impl ScriptedSpeechPipeline {
    pub fn new() -> Self {
        Self {
            commands: Mutex::new(VecDeque::new()),
            prompt: Mutex::new(None),
            spoken: Mutex::new(Vec::new()),
            results: Mutex::new(Vec::new()),
            say_outcome: SpeechOutcome::Completed,
            say_error: None,
            interrupt_error: None,
            interrupts: AtomicUsize::new(0),
            hold_playback: false,
            stop_playback: Notify::new(),
        }
    }

    /// Queue tool-call names returned by `next_command`, in order.
    pub fn with_commands<I, S>(self, commands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let commands = commands.into_iter().map(Into::into).collect();
        Self {
            commands: Mutex::new(commands),
            ..self
        }
    }

    /// Make every `say` report this outcome.
    pub fn with_say_outcome(self, outcome: SpeechOutcome) -> Self {
        Self {
            say_outcome: outcome,
            ..self
        }
    }

    /// Make every `say` fail with `error`.
    pub fn with_say_error(self, error: SpeechError) -> Self {
        Self {
            say_error: Some(error),
            ..self
        }
    }

    /// Make every `interrupt` fail with `error`.
    pub fn with_interrupt_error(self, error: SpeechError) -> Self {
        Self {
            interrupt_error: Some(error),
            ..self
        }
    }

    /// Keep interruptible speech playing until `interrupt` is called; the
    /// `say` call then reports `Interrupted`.
    pub fn with_held_playback(self) -> Self {
        Self {
            hold_playback: true,
            ..self
        }
    }

    /// Prompt passed to `start`, if started.
    pub async fn prompt(&self) -> Option<AgentPrompt> {
        self.prompt.lock().await.clone()
    }

    /// Every `say` call so far.
    pub async fn spoken(&self) -> Vec<SpokenLine> {
        self.spoken.lock().await.clone()
    }

    /// Every `(command, result)` pair returned to the language model.
    pub async fn results(&self) -> Vec<(String, String)> {
        self.results.lock().await.clone()
    }

    pub fn interrupt_count(&self) -> usize {
        self.interrupts.load(Ordering::SeqCst)
    }

    async fn ensure_started(&self) -> Result<(), SpeechError> {
        match self.prompt.lock().await.as_ref() {
            Some(_) => Ok(()),
            None => Err(SpeechError::NotStarted),
        }
    }
}

impl Default for ScriptedSpeechPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SpeechPipeline for ScriptedSpeechPipeline {
    async fn start(&self, prompt: &AgentPrompt) -> Result<(), SpeechError> {
        *self.prompt.lock().await = Some(prompt.clone());
        Ok(())
    }

    async fn say(
        &self,
        text: &str,
        allow_interruptions: bool,
    ) -> Result<SpeechOutcome, SpeechError> {
        self.ensure_started().await?;
        self.spoken.lock().await.push(SpokenLine {
            text: text.to_string(),
            allow_interruptions,
        });
        if let Some(error) = &self.say_error {
            return Err(error.clone());
        }
        if self.hold_playback && allow_interruptions {
            self.stop_playback.notified().await;
            return Ok(SpeechOutcome::Interrupted);
        }
        Ok(self.say_outcome)
    }

    async fn interrupt(&self) -> Result<(), SpeechError> {
        self.interrupts.fetch_add(1, Ordering::SeqCst);
        self.stop_playback.notify_one();
        match &self.interrupt_error {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    async fn next_command(&self) -> Option<String> {
        if self.ensure_started().await.is_err() {
            return None;
        }
        self.commands.lock().await.pop_front()
    }

    async fn complete_command(&self, command: &str, result: &str) -> Result<(), SpeechError> {
        self.ensure_started().await?;
        self.results
            .lock()
            .await
            .push((command.to_string(), result.to_string()));
        Ok(())
    }
}
