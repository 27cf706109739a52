//! Intent - the closed set of voice commands the agent understands.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use super::errors::UnrecognizedIntent;

/// A recognized voice command.
///
/// The set is closed: the speech pipeline is only ever offered these
/// commands as callable tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Sales,
    Crm,
    Inventory,
    Accounting,
    Purchases,
    Hr,
    Projects,
    Manufacturing,
    Home,
    WhereAmI,
}

impl Intent {
    /// Every intent, in the order tools are offered to the speech pipeline.
    pub const ALL: [Intent; 10] = [
        Intent::Sales,
        Intent::Crm,
        Intent::Inventory,
        Intent::Accounting,
        Intent::Purchases,
        Intent::Hr,
        Intent::Projects,
        Intent::Manufacturing,
        Intent::Home,
        Intent::WhereAmI,
    ];

    /// Short symbolic key, e.g. `"sales"`.
    pub fn key(&self) -> &'static str {
        match self {
            Intent::Sales => "sales",
            Intent::Crm => "crm",
            Intent::Inventory => "inventory",
            Intent::Accounting => "accounting",
            Intent::Purchases => "purchases",
            Intent::Hr => "hr",
            Intent::Projects => "projects",
            Intent::Manufacturing => "manufacturing",
            Intent::Home => "home",
            Intent::WhereAmI => "where_am_i",
        }
    }

    /// Name of the callable tool exposed to the language model.
    pub fn tool_name(&self) -> &'static str {
        match self {
            Intent::Sales => "navigate_to_sales",
            Intent::Crm => "navigate_to_crm",
            Intent::Inventory => "navigate_to_inventory",
            Intent::Accounting => "navigate_to_accounting",
            Intent::Purchases => "navigate_to_purchases",
            Intent::Hr => "navigate_to_hr",
            Intent::Projects => "navigate_to_projects",
            Intent::Manufacturing => "navigate_to_manufacturing",
            Intent::Home => "go_home",
            Intent::WhereAmI => "where_am_i",
        }
    }

    /// Tool description shown to the language model.
    pub fn description(&self) -> &'static str {
        match self {
            Intent::Sales => "Navigate to Sales module",
            Intent::Crm => "Navigate to CRM/Customers module",
            Intent::Inventory => "Navigate to Inventory/Stock module",
            Intent::Accounting => "Navigate to Accounting module",
            Intent::Purchases => "Navigate to Purchases module",
            Intent::Hr => "Navigate to Human Resources module",
            Intent::Projects => "Navigate to Projects module",
            Intent::Manufacturing => "Navigate to Manufacturing/MRP module",
            Intent::Home => "Navigate to home/dashboard",
            Intent::WhereAmI => "Tell user their current location - they need to inform you",
        }
    }

    /// True for the one intent that asks the user instead of navigating.
    pub fn is_clarification(&self) -> bool {
        matches!(self, Intent::WhereAmI)
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Lookup by key and tool name, both in canonical (lowercase, underscored) form.
static ALIASES: Lazy<HashMap<&'static str, Intent>> = Lazy::new(|| {
    let mut aliases = HashMap::new();
    for intent in Intent::ALL {
        aliases.insert(intent.key(), intent);
        aliases.insert(intent.tool_name(), intent);
    }
    aliases
});

fn canonicalize(raw: &str) -> String {
    raw.trim()
        .trim_end_matches('?')
        .trim()
        .to_lowercase()
        .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}

impl FromStr for Intent {
    type Err = UnrecognizedIntent;

    /// Accepts the key (`"sales"`), the tool name (`"navigate_to_sales"`), or
    /// a spoken form such as `"where am I?"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALIASES
            .get(canonicalize(s).as_str())
            .copied()
            .ok_or_else(|| UnrecognizedIntent(s.to_string()))
    }
}
