//! Key token types with typed parse errors.
//!
//! A `KeyToken` is the parsed form of a canonical `ctrl+shift+alt+key`
//! string. Parsing is strict: the input must already be in canonical form,
//! so `parse(s).to_string() == s` for every accepted `s`.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use super::event::KeyboardEvent;

/// Maximum number of `+`-separated segments: three modifiers plus the key.
const MAX_SEGMENTS: usize = 4;

/// Reasons a string is not a canonical key token.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyParseError {
    #[error("key token is empty")]
    Empty,
    #[error("key token has {0} segments, at most 4 are allowed")]
    TooManySegments(usize),
    #[error("modifier '{0}' appears more than once")]
    DuplicateModifier(String),
    #[error("key token has more than one non modifier key ('{first}' and '{second}')")]
    MultipleKeys { first: String, second: String },
    #[error("key token has no key, only modifiers")]
    MissingKey,
    #[error("key token is not canonical, expected '{expected}'")]
    NotCanonical { expected: String },
}

/// Modifier keys held during a key press.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Modifiers {
    #[serde(default)]
    pub ctrl: bool,
    #[serde(default)]
    pub shift: bool,
    #[serde(default)]
    pub alt: bool,
}

impl Modifiers {
    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Default::default()
        }
    }

    pub fn any(&self) -> bool {
        self.ctrl || self.shift || self.alt
    }

    pub fn none(&self) -> bool {
        !self.any()
    }
}

/// One canonical key combination.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyToken {
    pub key: String,
    pub modifiers: Modifiers,
}

impl KeyToken {
    pub fn new(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: key.into().to_lowercase(),
            modifiers,
        }
    }

    /// Build the token for a raw keyboard event.
    pub fn from_event<E: KeyboardEvent + ?Sized>(event: &E) -> Self {
        Self::new(event.key(), event.modifiers())
    }

    /// Parse a token that must already be canonical.
    pub fn parse(s: &str) -> Result<Self, KeyParseError> {
        if s.is_empty() {
            return Err(KeyParseError::Empty);
        }

        let segments: SmallVec<[&str; MAX_SEGMENTS]> = s.split('+').collect();
        if segments.len() > MAX_SEGMENTS {
            return Err(KeyParseError::TooManySegments(segments.len()));
        }

        let mut modifiers = Modifiers::default();
        let mut key_part: Option<&str> = None;

        for segment in segments {
            let flag = match segment {
                "ctrl" => &mut modifiers.ctrl,
                "shift" => &mut modifiers.shift,
                "alt" => &mut modifiers.alt,
                _ => {
                    if let Some(first) = key_part {
                        return Err(KeyParseError::MultipleKeys {
                            first: first.to_string(),
                            second: segment.to_string(),
                        });
                    }
                    key_part = Some(segment);
                    continue;
                }
            };
            if *flag {
                return Err(KeyParseError::DuplicateModifier(segment.to_string()));
            }
            *flag = true;
        }

        let key = match key_part {
            Some(key) if !key.is_empty() => key,
            _ => return Err(KeyParseError::MissingKey),
        };

        let token = Self::new(key, modifiers);
        let expected = token.to_canonical_string();
        if expected != s {
            return Err(KeyParseError::NotCanonical { expected });
        }

        Ok(token)
    }

    pub fn to_canonical_string(&self) -> String {
        let mut s = String::with_capacity(self.key.len() + 15);
        if self.modifiers.ctrl {
            s.push_str("ctrl+");
        }
        if self.modifiers.shift {
            s.push_str("shift+");
        }
        if self.modifiers.alt {
            s.push_str("alt+");
        }
        s.push_str(&self.key);
        s
    }
}

impl fmt::Display for KeyToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_canonical_string())
    }
}

/// Canonical token string for a raw keyboard event.
pub fn normalize<E: KeyboardEvent + ?Sized>(event: &E) -> String {
    KeyToken::from_event(event).to_canonical_string()
}

/// Whether `token` is already in canonical `ctrl+shift+alt+key` form.
pub fn is_canonical(token: &str) -> bool {
    KeyToken::parse(token).is_ok()
}
