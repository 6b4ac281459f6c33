//! Raw keyboard events as seen by an event source.

use serde::{Deserialize, Serialize};

use super::types::Modifiers;

/// A low-level key press delivered by an event source.
///
/// Mirrors the subset of a browser `KeyboardEvent` that dispatch needs.
/// `key()` is the primary key name as reported by the platform (any case).
pub trait KeyboardEvent {
    fn key(&self) -> &str;
    fn ctrl_key(&self) -> bool;
    fn shift_key(&self) -> bool;
    fn alt_key(&self) -> bool;

    /// Ask the event source to skip its own handling of this event.
    fn prevent_default(&mut self);

    fn modifiers(&self) -> Modifiers {
        Modifiers {
            ctrl: self.ctrl_key(),
            shift: self.shift_key(),
            alt: self.alt_key(),
        }
    }
}

/// Plain owned key event.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    pub key: String,
    #[serde(default)]
    pub modifiers: Modifiers,
    #[serde(skip)]
    default_prevented: bool,
}

impl KeyEvent {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            modifiers: Modifiers::default(),
            default_prevented: false,
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn with_ctrl(mut self) -> Self {
        self.modifiers.ctrl = true;
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.modifiers.shift = true;
        self
    }

    pub fn with_alt(mut self) -> Self {
        self.modifiers.alt = true;
        self
    }

    /// Whether a dispatcher called `prevent_default` on this event.
    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

impl KeyboardEvent for KeyEvent {
    fn key(&self) -> &str {
        &self.key
    }

    fn ctrl_key(&self) -> bool {
        self.modifiers.ctrl
    }

    fn shift_key(&self) -> bool {
        self.modifiers.shift
    }

    fn alt_key(&self) -> bool {
        self.modifiers.alt
    }

    fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    fn modifiers(&self) -> Modifiers {
        self.modifiers
    }
}
