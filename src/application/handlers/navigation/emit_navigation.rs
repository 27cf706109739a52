//! NavigationEmitter - pushes navigation events over the room data channel.

use crate::domain::navigation::{EmitError, NavigationEvent, NavigationTarget};
use crate::domain::session::SessionContext;
use crate::ports::DataDelivery;

/// Serializes targets into `NavigationEvent`s and publishes them reliably to
/// every participant of the active session.
///
/// Exactly one publish attempt per call; no retries.
#[derive(Debug, Clone, Default)]
pub struct NavigationEmitter;

impl NavigationEmitter {
    pub fn new() -> Self {
        Self
    }

    /// Publish `target` on the session's data channel.
    ///
    /// # Errors
    ///
    /// - `EmitError::NoActiveSession` if `ctx` holds no connection; nothing
    ///   is sent.
    /// - `EmitError::ChannelFailure` if the transport reports an error.
    pub async fn emit(
        &self,
        ctx: &SessionContext,
        target: &NavigationTarget,
    ) -> Result<(), EmitError> {
        let handle = ctx.active().ok_or(EmitError::NoActiveSession)?;

        let event = NavigationEvent::navigate(target.clone());
        let payload = event.to_bytes()?;

        handle
            .transport()
            .publish_data(payload, DataDelivery::Reliable)
            .await
            .map_err(|e| EmitError::ChannelFailure(e.to_string()))?;

        tracing::info!(
            session_id = %handle.id(),
            pathname = %target,
            url = %target.absolute_url(&ctx.config().host_base_url),
            "Sent navigation command"
        );
        Ok(())
    }
}
