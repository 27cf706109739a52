//! BootstrapSequencer - brings a session from start request to dispatch.
//!
//! Strictly sequential: connect, wait for one participant, greet once, then
//! hand over to intent dispatch. Each step advances `BootstrapPhase` through
//! its validated transitions.

use std::sync::Arc;

use crate::domain::foundation::{RoomName, StateMachine};
use crate::domain::session::{BootstrapPhase, SessionContext, SessionError, SessionHandle};
use crate::ports::{
    AgentPrompt, AutoSubscribe, ConnectOptions, RoomTransport, SpeechOutcome, SpeechPipeline,
};

/// Drives one session through `Idle -> Connecting -> AwaitingParticipant ->
/// Greeted -> Active`.
pub struct BootstrapSequencer {
    transport: Arc<dyn RoomTransport>,
    speech: Arc<dyn SpeechPipeline>,
    prompt: AgentPrompt,
    greeting: String,
    phase: BootstrapPhase,
}

impl BootstrapSequencer {
    pub fn new(
        transport: Arc<dyn RoomTransport>,
        speech: Arc<dyn SpeechPipeline>,
        prompt: AgentPrompt,
        greeting: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            speech,
            prompt,
            greeting: greeting.into(),
            phase: BootstrapPhase::Idle,
        }
    }

    pub fn phase(&self) -> BootstrapPhase {
        self.phase
    }

    pub fn greeting(&self) -> &str {
        &self.greeting
    }

    /// Run the bootstrap sequence for `room`.
    ///
    /// On success the session is `Active` and `ctx` holds the handle. The
    /// greeting's outcome never fails the sequence.
    ///
    /// # Errors
    ///
    /// - `SessionError::InvalidState` if called twice
    /// - `SessionError::ConnectFailed` if the transport refuses the room
    /// - `SessionError::SpeechUnavailable` if the pipeline cannot start
    /// - `SessionError::ParticipantUnavailable` if the room closes before
    ///   anyone joins
    pub async fn run(
        &mut self,
        ctx: &mut SessionContext,
        room: RoomName,
    ) -> Result<SessionHandle, SessionError> {
        // 1. Idle -> Connecting
        self.advance(BootstrapPhase::Connecting)?;

        let options = ConnectOptions {
            url: ctx.config().transport_url.clone(),
            room: room.clone(),
            credentials: ctx.config().credentials.clone(),
            auto_subscribe: AutoSubscribe::AudioOnly,
        };
        self.transport
            .connect(&options)
            .await
            .map_err(SessionError::ConnectFailed)?;

        let handle = ctx.begin(room, Arc::clone(&self.transport));
        tracing::info!(session_id = %handle.id(), room = %handle.room(), "Connected to room");

        self.speech
            .start(&self.prompt)
            .await
            .map_err(SessionError::SpeechUnavailable)?;

        // 2. Connecting -> AwaitingParticipant
        self.advance(BootstrapPhase::AwaitingParticipant)?;

        let participant = self
            .transport
            .wait_for_participant()
            .await
            .map_err(SessionError::ParticipantUnavailable)?;
        tracing::info!(participant = %participant.identity, "Participant joined");
        ctx.attach_participant(participant)?;

        // 3. AwaitingParticipant -> Greeted
        match self.speech.say(&self.greeting, true).await {
            Ok(SpeechOutcome::Completed) => {}
            Ok(SpeechOutcome::Interrupted) => {
                tracing::debug!("Greeting interrupted by user speech");
            }
            Err(e) => {
                tracing::warn!(error = %e, "Greeting could not be spoken");
            }
        }
        self.advance(BootstrapPhase::Greeted)?;

        // 4. Greeted -> Active
        self.advance(BootstrapPhase::Active)?;

        ctx.active().cloned().ok_or(SessionError::NoActiveSession)
    }

    fn advance(&mut self, target: BootstrapPhase) -> Result<(), SessionError> {
        self.phase = self.phase.transition_to(target)?;
        tracing::debug!(phase = %self.phase, "Bootstrap phase changed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::room::BroadcastRoom;
    use crate::adapters::speech::ScriptedSpeechPipeline;
    use crate::domain::access::TransportCredentials;
    use crate::domain::foundation::{ErrorCode, ParticipantIdentity};
    use crate::domain::session::{SessionConfig, DEFAULT_GREETING};
    use crate::ports::{SpeechError, TransportError};
    use std::time::Duration;
    use url::Url;

    fn context() -> SessionContext {
        SessionContext::new(SessionConfig::new(
            Url::parse("ws://127.0.0.1:7880").unwrap(),
            TransportCredentials::new("key", "secret"),
            Url::parse("http://localhost:8069").unwrap(),
        ))
    }

    fn prompt() -> AgentPrompt {
        AgentPrompt {
            instructions: "Navigate the ERP.".to_string(),
            tools: Vec::new(),
        }
    }

    fn room_name() -> RoomName {
        RoomName::new("voice_7_1700000000").unwrap()
    }

    fn sequencer(
        room: Arc<BroadcastRoom>,
        speech: Arc<ScriptedSpeechPipeline>,
    ) -> BootstrapSequencer {
        BootstrapSequencer::new(room, speech, prompt(), DEFAULT_GREETING)
    }

    #[tokio::test]
    async fn reaches_active_and_greets_once() {
        let room = Arc::new(BroadcastRoom::default());
        let _client = room.join(ParticipantIdentity::new("User7").unwrap());
        let speech = Arc::new(ScriptedSpeechPipeline::new());
        let mut ctx = context();
        let mut seq = sequencer(room.clone(), speech.clone());

        let handle = seq.run(&mut ctx, room_name()).await.unwrap();

        assert_eq!(seq.phase(), BootstrapPhase::Active);
        assert_eq!(handle.participant().unwrap().identity.as_str(), "User7");
        assert_eq!(room.connected_room().await.unwrap(), room_name());

        let spoken = speech.spoken().await;
        assert_eq!(spoken.len(), 1);
        assert_eq!(spoken[0].text, DEFAULT_GREETING);
        assert!(spoken[0].allow_interruptions);
    }

    #[tokio::test]
    async fn greeting_is_not_a_navigation_event() {
        let room = Arc::new(BroadcastRoom::default());
        let _client = room.join(ParticipantIdentity::new("User7").unwrap());
        let speech = Arc::new(ScriptedSpeechPipeline::new());
        let mut ctx = context();

        sequencer(room.clone(), speech).run(&mut ctx, room_name()).await.unwrap();

        assert_eq!(room.published_count(), 0);
    }

    #[tokio::test]
    async fn waits_for_participant_before_greeting() {
        let room = Arc::new(BroadcastRoom::default());
        let speech = Arc::new(ScriptedSpeechPipeline::new());

        let task = {
            let room = room.clone();
            let speech = speech.clone();
            tokio::spawn(async move {
                let mut ctx = context();
                let mut seq = sequencer(room, speech);
                seq.run(&mut ctx, room_name()).await.map(|_| seq.phase())
            })
        };

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!task.is_finished());
        assert!(speech.spoken().await.is_empty());

        let _client = room.join(ParticipantIdentity::new("User7").unwrap());
        assert_eq!(task.await.unwrap().unwrap(), BootstrapPhase::Active);
        assert_eq!(speech.spoken().await.len(), 1);
    }

    #[tokio::test]
    async fn interrupted_greeting_still_activates() {
        let room = Arc::new(BroadcastRoom::default());
        let _client = room.join(ParticipantIdentity::new("User7").unwrap());
        let speech =
            Arc::new(ScriptedSpeechPipeline::new().with_say_outcome(SpeechOutcome::Interrupted));
        let mut ctx = context();
        let mut seq = sequencer(room, speech);

        seq.run(&mut ctx, room_name()).await.unwrap();

        assert_eq!(seq.phase(), BootstrapPhase::Active);
    }

    #[tokio::test]
    async fn failed_greeting_still_activates() {
        let room = Arc::new(BroadcastRoom::default());
        let _client = room.join(ParticipantIdentity::new("User7").unwrap());
        let speech = Arc::new(
            ScriptedSpeechPipeline::new()
                .with_say_error(SpeechError::Synthesis("tts offline".to_string())),
        );
        let mut ctx = context();
        let mut seq = sequencer(room, speech);

        seq.run(&mut ctx, room_name()).await.unwrap();

        assert_eq!(seq.phase(), BootstrapPhase::Active);
        assert!(ctx.is_active());
    }

    #[tokio::test]
    async fn closed_room_fails_to_connect() {
        let room = Arc::new(BroadcastRoom::default());
        room.close();
        let speech = Arc::new(ScriptedSpeechPipeline::new());
        let mut ctx = context();
        let mut seq = sequencer(room, speech.clone());

        let err = seq.run(&mut ctx, room_name()).await.unwrap_err();

        assert!(matches!(err, SessionError::ConnectFailed(TransportError::ConnectFailed(_))));
        assert_eq!(seq.phase(), BootstrapPhase::Connecting);
        assert!(!ctx.is_active());
        assert!(speech.prompt().await.is_none());
    }

    #[tokio::test]
    async fn room_closing_before_join_is_participant_unavailable() {
        let room = Arc::new(BroadcastRoom::default());
        let speech = Arc::new(ScriptedSpeechPipeline::new());

        let task = {
            let room = room.clone();
            tokio::spawn(async move {
                let mut ctx = context();
                let mut seq = sequencer(room, speech);
                let result = seq.run(&mut ctx, room_name()).await;
                (result, seq.phase())
            })
        };
        tokio::time::sleep(Duration::from_millis(20)).await;
        room.close();

        let (result, phase) = task.await.unwrap();
        let err = result.unwrap_err();
        assert_eq!(err, SessionError::ParticipantUnavailable(TransportError::Closed));
        assert_eq!(err.code(), ErrorCode::TransportError);
        assert_eq!(phase, BootstrapPhase::AwaitingParticipant);
    }

    #[tokio::test]
    async fn second_run_is_rejected() {
        let room = Arc::new(BroadcastRoom::default());
        let _client = room.join(ParticipantIdentity::new("User7").unwrap());
        let speech = Arc::new(ScriptedSpeechPipeline::new());
        let mut ctx = context();
        let mut seq = sequencer(room, speech);

        seq.run(&mut ctx, room_name()).await.unwrap();
        let err = seq.run(&mut ctx, room_name()).await.unwrap_err();

        assert!(matches!(err, SessionError::InvalidState(_)));
        assert_eq!(seq.phase(), BootstrapPhase::Active);
    }

    #[tokio::test]
    async fn prompt_is_loaded_before_greeting() {
        let room = Arc::new(BroadcastRoom::default());
        let _client = room.join(ParticipantIdentity::new("User7").unwrap());
        let speech = Arc::new(ScriptedSpeechPipeline::new());
        let mut ctx = context();

        sequencer(room, speech.clone()).run(&mut ctx, room_name()).await.unwrap();

        assert_eq!(speech.prompt().await.unwrap().instructions, "Navigate the ERP.");
    }
}
