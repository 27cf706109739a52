//! HandleIntentHandler - the agent's single exposed operation.

use crate::domain::navigation::{Intent, IntentOutcome, IntentRegistry};
use crate::domain::session::SessionContext;

use super::emit_navigation::NavigationEmitter;

/// Resolves an intent and, for navigable intents, pushes the target to the
/// host application.
///
/// Emission failures are logged and absorbed: the caller always receives the
/// outcome, so the speech layer confirms the action either way.
#[derive(Debug, Clone, Default)]
pub struct HandleIntentHandler {
    registry: IntentRegistry,
    emitter: NavigationEmitter,
}

impl HandleIntentHandler {
    pub fn new(registry: IntentRegistry, emitter: NavigationEmitter) -> Self {
        Self { registry, emitter }
    }

    pub fn registry(&self) -> &IntentRegistry {
        &self.registry
    }

    pub async fn handle(&self, ctx: &SessionContext, intent: Intent) -> IntentOutcome {
        let outcome = self.registry.resolve(intent);

        match &outcome {
            IntentOutcome::Navigate { target, .. } => {
                if let Err(e) = self.emitter.emit(ctx, target).await {
                    tracing::error!(
                        intent = %intent,
                        pathname = %target,
                        code = %e.code(),
                        "Error sending navigation: {}",
                        e
                    );
                }
            }
            IntentOutcome::Clarify(_) => {
                tracing::debug!(intent = %intent, "Asking user for clarification");
            }
        }

        outcome
    }
}
