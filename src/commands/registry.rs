//! Flattened command registry.
//!
//! Merges groups, in order, into one code lookup and one key index.

use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use super::command::Command;
use super::group::CommandGroup;
use crate::error::{CommandError, Result};

/// All commands of a manager, flattened across groups.
#[derive(Clone, Debug, Default)]
pub struct CommandRegistry {
    commands: Vec<Command>,
    code_to_index: HashMap<String, usize>,
    key_index: HashMap<String, String>,
}

impl CommandRegistry {
    /// Flatten `groups` in order.
    ///
    /// A later command replaces an earlier one with the same code, and a later
    /// key binding replaces an earlier one with the same key. Disabled
    /// commands are kept but never enter the key index.
    pub fn build(groups: &[CommandGroup], warn_on_key_override: bool) -> Self {
        let mut registry = Self::default();

        for group in groups {
            for command in group {
                registry.insert(command.clone(), warn_on_key_override);
            }
        }

        debug!(
            event_type = "registry_built",
            groups = groups.len(),
            commands = registry.commands.len(),
            keybinds = registry.key_index.len(),
            "Command registry built"
        );

        registry
    }

    fn insert(&mut self, command: Command, warn_on_key_override: bool) {
        let code = command.code.clone();

        if let Some(&existing_index) = self.code_to_index.get(&code) {
            self.key_index.retain(|_, bound| *bound != code);
            self.commands[existing_index] = command;
        } else {
            self.code_to_index.insert(code.clone(), self.commands.len());
            self.commands.push(command);
        }

        let Some(index) = self.code_to_index.get(&code).copied() else {
            return;
        };
        let command = &self.commands[index];
        if command.disabled {
            return;
        }
        if let Some(key) = &command.key {
            if let Some(previous) = self.key_index.insert(key.clone(), code.clone()) {
                if warn_on_key_override && previous != code {
                    warn!(
                        event_type = "key_override",
                        key = %key,
                        previous_code = %previous,
                        code = %code,
                        group = %command.group,
                        "Key rebound by a later command group"
                    );
                }
            }
        }
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn get(&self, code: &str) -> Option<&Command> {
        self.code_to_index
            .get(code)
            .and_then(|&i| self.commands.get(i))
    }

    /// Canonical key token -> command code.
    pub fn keybinds(&self) -> &HashMap<String, String> {
        &self.key_index
    }

    pub fn code_for_key(&self, key: &str) -> Option<&str> {
        self.key_index.get(key).map(String::as_str)
    }

    pub fn commands_in_group(&self, group: &str) -> Vec<&Command> {
        self.commands.iter().filter(|c| c.group == group).collect()
    }

    /// Distinct group labels in registration order.
    pub fn groups(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.commands
            .iter()
            .map(|c| c.group.as_str())
            .filter(|g| seen.insert(*g))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl<'a> IntoIterator for &'a CommandRegistry {
    type Item = &'a Command;
    type IntoIter = std::slice::Iter<'a, Command>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

/// Fail with `DuplicateCode` if any code is defined by more than one group.
pub(crate) fn ensure_unique_codes(groups: &[CommandGroup]) -> Result<()> {
    let mut owners: HashMap<&str, &str> = HashMap::new();
    let mut duplicated: Vec<String> = Vec::new();

    for group in groups {
        for command in group {
            if owners.insert(&command.code, group.group()).is_some()
                && !duplicated.contains(&command.code)
            {
                duplicated.push(command.code.clone());
            }
        }
    }

    if duplicated.is_empty() {
        Ok(())
    } else {
        Err(CommandError::DuplicateCode { codes: duplicated })
    }
}
