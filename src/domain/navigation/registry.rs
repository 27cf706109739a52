//! IntentRegistry - resolves intents to navigation targets or clarifications.

use serde::Serialize;
use std::fmt;

use super::intent::Intent;
use super::target::NavigationTarget;

/// Reply for the one intent that cannot navigate on its own.
pub const WHERE_AM_I_REPLY: &str =
    "I need you to tell me where you are. What page or module are you currently viewing?";

/// Text asking the user for more information; never navigates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ClarificationMessage(String);

impl ClarificationMessage {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClarificationMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Result of resolving an intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntentOutcome {
    /// Push `target` to the host application and confirm with `reply`.
    Navigate {
        intent: Intent,
        target: NavigationTarget,
        reply: &'static str,
    },
    /// Ask the user; nothing is emitted.
    Clarify(ClarificationMessage),
}

impl IntentOutcome {
    /// Text handed back to the speech pipeline as the tool result.
    pub fn reply(&self) -> &str {
        match self {
            IntentOutcome::Navigate { reply, .. } => reply,
            IntentOutcome::Clarify(message) => message.as_str(),
        }
    }

    pub fn target(&self) -> Option<&NavigationTarget> {
        match self {
            IntentOutcome::Navigate { target, .. } => Some(target),
            IntentOutcome::Clarify(_) => None,
        }
    }
}

/// Callable tool advertised to the language model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
}

enum Route {
    Navigate(&'static str, &'static str),
    Clarify(&'static str),
}

/// Static intent -> destination table.
fn route(intent: Intent) -> Route {
    match intent {
        Intent::Sales => Route::Navigate("#menu_id=sales.sale_menu_root", "Opening Sales module"),
        Intent::Crm => Route::Navigate("#menu_id=crm.crm_menu_root", "Opening CRM module"),
        Intent::Inventory => {
            Route::Navigate("#menu_id=stock.menu_stock_root", "Opening Inventory module")
        }
        Intent::Accounting => {
            Route::Navigate("#menu_id=account.menu_finance", "Opening Accounting module")
        }
        Intent::Purchases => {
            Route::Navigate("#menu_id=purchase.menu_purchase_root", "Opening Purchases module")
        }
        Intent::Hr => Route::Navigate("#menu_id=hr.menu_hr_root", "Opening HR module"),
        Intent::Projects => {
            Route::Navigate("#menu_id=project.menu_main_pm", "Opening Projects module")
        }
        Intent::Manufacturing => {
            Route::Navigate("#menu_id=mrp.menu_mrp_root", "Opening Manufacturing module")
        }
        Intent::Home => Route::Navigate("#", "Going to home page"),
        Intent::WhereAmI => Route::Clarify(WHERE_AM_I_REPLY),
    }
}

/// Read-only registry of every intent the agent handles.
#[derive(Debug, Clone)]
pub struct IntentRegistry {
    tools: Vec<ToolDescriptor>,
}

impl IntentRegistry {
    pub fn new() -> Self {
        let tools = Intent::ALL
            .iter()
            .map(|intent| ToolDescriptor {
                name: intent.tool_name(),
                description: intent.description(),
            })
            .collect();
        Self { tools }
    }

    /// Resolves an intent. Pure lookup; no I/O.
    pub fn resolve(&self, intent: Intent) -> IntentOutcome {
        match route(intent) {
            Route::Navigate(fragment, reply) => IntentOutcome::Navigate {
                intent,
                target: NavigationTarget::normalize(fragment),
                reply,
            },
            Route::Clarify(text) => IntentOutcome::Clarify(ClarificationMessage::new(text)),
        }
    }

    /// Tools to register with the speech pipeline, one per intent.
    pub fn tool_descriptors(&self) -> &[ToolDescriptor] {
        &self.tools
    }
}

impl Default for IntentRegistry {
    fn default() -> Self {
        Self::new()
    }
}
