//! Structural checks over a command set.
//!
//! Rules run in a fixed order and the first failing rule is reported with
//! every command that broke it.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::command::Command;
use crate::error::{CommandError, Result};
use crate::keys::is_canonical;

/// Validate a command set: a slice, a `&CommandGroup`, a `&CommandRegistry`,
/// or anything else yielding `&Command`.
///
/// Checks, in order: descriptions present, keys unique, codes unique, code
/// syntax (`^[a-z][a-z0-9_]*$`), key syntax (canonical `ctrl+shift+alt+key`).
pub fn validate<'a, I>(commands: I) -> Result<()>
where
    I: IntoIterator<Item = &'a Command>,
{
    let commands: Vec<&Command> = commands.into_iter().collect();
    let keys: Vec<&str> = commands.iter().filter_map(|c| c.key.as_deref()).collect();

    let without_description: Vec<String> = commands
        .iter()
        .filter(|c| c.description.is_empty())
        .map(|c| c.code.clone())
        .collect();
    if !without_description.is_empty() {
        return Err(CommandError::MissingDescription {
            codes: without_description,
        });
    }

    let duplicated_keys = duplicates(keys.iter().copied());
    if !duplicated_keys.is_empty() {
        return Err(CommandError::DuplicateKey {
            keys: duplicated_keys,
        });
    }

    let duplicated_codes = duplicates(commands.iter().map(|c| c.code.as_str()));
    if !duplicated_codes.is_empty() {
        return Err(CommandError::DuplicateCode {
            codes: duplicated_codes,
        });
    }

    let invalid_codes: Vec<String> = commands
        .iter()
        .filter(|c| !is_valid_code(&c.code))
        .map(|c| c.code.clone())
        .collect();
    if !invalid_codes.is_empty() {
        return Err(CommandError::InvalidCode {
            codes: invalid_codes,
        });
    }

    let invalid_keys: Vec<String> = keys
        .iter()
        .filter(|k| !is_canonical(k))
        .map(|k| k.to_string())
        .collect();
    if !invalid_keys.is_empty() {
        return Err(CommandError::InvalidKey { keys: invalid_keys });
    }

    debug!(
        event_type = "commands_validated",
        commands = commands.len(),
        keys = keys.len(),
        "Command set is valid"
    );
    Ok(())
}

static CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9_]*$").expect("Invalid regex"));

/// Lowercase letters, digits and underscores, starting with a letter.
pub fn is_valid_code(code: &str) -> bool {
    CODE_PATTERN.is_match(code)
}

/// Every value seen more than once, listed once each.
fn duplicates<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut duplicated: Vec<String> = Vec::new();
    for value in values {
        if !seen.insert(value) && !duplicated.iter().any(|d| d == value) {
            duplicated.push(value.to_string());
        }
    }
    duplicated
}
