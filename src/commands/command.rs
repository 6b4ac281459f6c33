use serde::{Deserialize, Serialize};

/// What a caller writes for one command before it joins a group.
///
/// The code is the mapping key the spec is registered under, and the group
/// label comes from the owning `CommandGroup`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CommandSpec {
    /// Text shown to the user, e.g. "Open cash drawer"
    pub description: String,
    /// Canonical key token, e.g. "ctrl+g"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Disabled commands are listed but never dispatched
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub disabled: bool,
}

impl CommandSpec {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            key: None,
            disabled: false,
        }
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// A registered command with its code and group stamped.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    pub code: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub group: String,
    #[serde(default)]
    pub disabled: bool,
}

impl Command {
    pub(crate) fn from_spec(code: String, group: &str, spec: CommandSpec) -> Self {
        Self {
            code,
            description: spec.description,
            key: spec.key,
            group: group.to_string(),
            disabled: spec.disabled,
        }
    }
}
