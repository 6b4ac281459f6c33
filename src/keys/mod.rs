//! Canonical key tokens.
//!
//! This module provides:
//! - `KeyToken` - a parsed `ctrl+shift+alt+key` combination
//! - `normalize` - raw keyboard event to canonical token string
//! - `is_canonical` - check that a caller-supplied string is already canonical
//!
//! # Token grammar
//!
//! Modifiers appear only when held, always in the fixed order `ctrl`, `shift`,
//! `alt`, followed by exactly one lowercase key name:
//!
//! ```
//! use global_commands::keys::{is_canonical, normalize, KeyEvent};
//!
//! let event = KeyEvent::new("G").with_ctrl().with_shift();
//! assert_eq!(normalize(&event), "ctrl+shift+g");
//! assert!(is_canonical("ctrl+shift+g"));
//! assert!(!is_canonical("shift+ctrl+g"));
//! ```

mod event;
mod types;

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;

pub use event::{KeyEvent, KeyboardEvent};
pub use types::{is_canonical, normalize, KeyParseError, KeyToken, Modifiers};
