//! Named command groups.
//!
//! Uses Vec for deterministic iteration order and HashMap for O(1) lookup.

use std::collections::HashMap;

use serde_json::Value;

use super::command::{Command, CommandSpec};
use crate::error::{CommandError, Result};

/// A labelled set of commands, in the order the caller defined them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandGroup {
    group: String,
    commands: Vec<Command>,
    code_to_index: HashMap<String, usize>,
}

impl CommandGroup {
    /// Build a group, stamping each command with its mapping key as code and
    /// `group` as its label.
    ///
    /// A code given twice keeps its first position and the last spec.
    pub fn new<I, C>(group: impl Into<String>, entries: I) -> Self
    where
        I: IntoIterator<Item = (C, CommandSpec)>,
        C: Into<String>,
    {
        let group = group.into();
        let mut commands: Vec<Command> = Vec::new();
        let mut code_to_index = HashMap::new();

        for (code, spec) in entries {
            let command = Command::from_spec(code.into(), &group, spec);
            if let Some(&existing_index) = code_to_index.get(&command.code) {
                commands[existing_index] = command;
            } else {
                code_to_index.insert(command.code.clone(), commands.len());
                commands.push(command);
            }
        }

        Self {
            group,
            commands,
            code_to_index,
        }
    }

    /// Build a group from a JSON object of `code -> { description, key?, disabled? }`.
    ///
    /// Object order is kept as command order.
    pub fn from_json(group: impl Into<String>, value: &Value) -> Result<Self> {
        let group = group.into();
        let invalid = |message: String| CommandError::InvalidShape {
            group: group.clone(),
            message,
        };

        let object = value
            .as_object()
            .ok_or_else(|| invalid(format!("expected an object of commands, got {}", kind(value))))?;

        let mut entries = Vec::with_capacity(object.len());
        for (code, raw) in object {
            if !raw.is_object() {
                return Err(invalid(format!(
                    "command '{}' must be an object with a description, got {}",
                    code,
                    kind(raw)
                )));
            }
            let spec: CommandSpec = serde_json::from_value(raw.clone())
                .map_err(|e| invalid(format!("command '{}': {}", code, e)))?;
            entries.push((code.clone(), spec));
        }

        Ok(Self::new(group, entries))
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn codes(&self) -> Vec<&str> {
        self.commands.iter().map(|c| c.code.as_str()).collect()
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn get(&self, code: &str) -> Option<&Command> {
        self.code_to_index
            .get(code)
            .and_then(|&i| self.commands.get(i))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Command> {
        self.commands.iter()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl<'a> IntoIterator for &'a CommandGroup {
    type Item = &'a Command;
    type IntoIter = std::slice::Iter<'a, Command>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
