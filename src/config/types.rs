//! Configuration type definitions

use serde::{Deserialize, Serialize};

use super::defaults::*;
use crate::error::{CommandError, Result};

/// Settings for a `CommandManager`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagerConfig {
    /// Event name passed to the event source when attaching (default: "keydown")
    #[serde(default = "default_event_name")]
    pub event_name: String,
    /// Call `prevent_default` on raw events that ran a handler (default: true)
    #[serde(default = "default_prevent_default")]
    pub prevent_default: bool,
    /// Warn when a later group rebinds a key (default: true)
    #[serde(default = "default_warn_on_key_override")]
    pub warn_on_key_override: bool,
    /// Warn when a scope names codes the registry does not know (default: true)
    #[serde(default = "default_warn_on_unknown_scope_codes")]
    pub warn_on_unknown_scope_codes: bool,
}

fn default_event_name() -> String {
    DEFAULT_EVENT_NAME.to_string()
}
fn default_prevent_default() -> bool {
    DEFAULT_PREVENT_DEFAULT
}
fn default_warn_on_key_override() -> bool {
    DEFAULT_WARN_ON_KEY_OVERRIDE
}
fn default_warn_on_unknown_scope_codes() -> bool {
    DEFAULT_WARN_ON_UNKNOWN_SCOPE_CODES
}

impl Default for ManagerConfig {
    fn default() -> Self {
        ManagerConfig {
            event_name: default_event_name(),
            prevent_default: DEFAULT_PREVENT_DEFAULT,
            warn_on_key_override: DEFAULT_WARN_ON_KEY_OVERRIDE,
            warn_on_unknown_scope_codes: DEFAULT_WARN_ON_UNKNOWN_SCOPE_CODES,
        }
    }
}

impl ManagerConfig {
    /// Parse a JSON config; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| CommandError::Config(e.to_string()))?;
        if config.event_name.trim().is_empty() {
            return Err(CommandError::Config("eventName must not be empty".to_string()));
        }
        Ok(config)
    }
}
