//! VoiceAgent - one voice session from bootstrap to shutdown.
//!
//! Owns the `SessionContext` and composes the bootstrap sequencer with the
//! intent handler. The speech pipeline feeds it tool-call names; each one is
//! parsed into an `Intent`, resolved, and (when navigable) pushed to the
//! host application over the room's data channel.

use std::sync::Arc;

use crate::domain::foundation::RoomName;
use crate::domain::navigation::{Intent, IntentOutcome, IntentRegistry};
use crate::domain::session::{
    AgentInstructions, BootstrapPhase, SessionConfig, SessionContext, SessionError, SessionHandle,
};
use crate::ports::{AgentPrompt, RoomTransport, SpeechPipeline};

use super::handlers::{BootstrapSequencer, HandleIntentHandler, NavigationEmitter};

/// Cloneable handle that forwards barge-in to the speech pipeline.
///
/// Obtained from [`VoiceAgent::interrupt_handle`]; usable while the agent is
/// busy in `start` or `run`, e.g. during the greeting.
#[derive(Clone)]
pub struct InterruptHandle {
    speech: Arc<dyn SpeechPipeline>,
}

impl InterruptHandle {
    /// The user started talking: ask the pipeline to stop any playback.
    /// A failed request is logged and otherwise ignored.
    pub async fn user_started_speaking(&self) {
        if let Err(e) = self.speech.interrupt().await {
            tracing::debug!(error = %e, "Interrupt request ignored");
        }
    }
}

/// A single-room, single-participant voice navigation agent.
pub struct VoiceAgent {
    context: SessionContext,
    sequencer: BootstrapSequencer,
    intents: HandleIntentHandler,
    speech: Arc<dyn SpeechPipeline>,
}

impl VoiceAgent {
    pub fn new(
        config: SessionConfig,
        transport: Arc<dyn RoomTransport>,
        speech: Arc<dyn SpeechPipeline>,
        greeting: impl Into<String>,
        instructions: AgentInstructions,
    ) -> Self {
        let registry = IntentRegistry::new();
        let prompt = AgentPrompt {
            instructions: instructions.into_string(),
            tools: registry.tool_descriptors().to_vec(),
        };

        Self {
            context: SessionContext::new(config),
            sequencer: BootstrapSequencer::new(transport, Arc::clone(&speech), prompt, greeting),
            intents: HandleIntentHandler::new(registry, NavigationEmitter::new()),
            speech,
        }
    }

    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    pub fn phase(&self) -> BootstrapPhase {
        self.sequencer.phase()
    }

    /// Connect, wait for the participant, and greet them.
    pub async fn start(&mut self, room: RoomName) -> Result<SessionHandle, SessionError> {
        self.sequencer.run(&mut self.context, room).await
    }

    /// Resolve `intent` and navigate the host application when it names a
    /// destination. Never fails; emission errors are logged.
    pub async fn handle_intent(&self, intent: Intent) -> IntentOutcome {
        if !self.phase().accepts_intents() {
            tracing::debug!(intent = %intent, phase = %self.phase(), "Intent received before session is active");
        }
        self.intents.handle(&self.context, intent).await
    }

    /// Dispatch a raw tool-call name from the speech pipeline.
    ///
    /// Returns `None` for names outside the intent set; those are logged and
    /// ignored.
    pub async fn dispatch_command(&self, command: &str) -> Option<IntentOutcome> {
        match command.parse::<Intent>() {
            Ok(intent) => Some(self.handle_intent(intent).await),
            Err(e) => {
                tracing::warn!(command, code = %e.code(), "Ignoring unrecognized intent");
                None
            }
        }
    }

    pub fn interrupt_handle(&self) -> InterruptHandle {
        InterruptHandle {
            speech: Arc::clone(&self.speech),
        }
    }

    /// The user started talking: ask the pipeline to stop any playback.
    pub async fn on_user_speech_started(&self) {
        self.interrupt_handle().user_started_speaking().await;
    }

    /// Run a whole session: bootstrap, dispatch commands until the pipeline
    /// closes, then disconnect.
    pub async fn run(&mut self, room: RoomName) -> Result<(), SessionError> {
        if let Err(e) = self.start(room).await {
            tracing::error!(error = %e, code = %e.code(), "Session bootstrap failed");
            self.shutdown().await;
            return Err(e);
        }

        while let Some(command) = self.speech.next_command().await {
            let Some(outcome) = self.dispatch_command(&command).await else {
                continue;
            };
            if let Err(e) = self.speech.complete_command(&command, outcome.reply()).await {
                tracing::warn!(command = %command, error = %e, "Failed to return tool result");
            }
        }

        tracing::info!("Speech pipeline closed");
        self.shutdown().await;
        Ok(())
    }

    /// End the session and leave the room.
    pub async fn shutdown(&mut self) {
        let Some(handle) = self.context.end() else {
            return;
        };
        if let Err(e) = handle.transport().disconnect().await {
            tracing::warn!(session_id = %handle.id(), error = %e, "Disconnect failed");
        }
    }
}
