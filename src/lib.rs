//! Global Commands - grouped keyboard commands with scoped dispatch
//!
//! Applications register named commands in groups, validate them once at
//! startup, and push handler scopes as UI contexts come and go. Each key
//! press reaches exactly one scope: the most recently pushed one.

pub mod commands;
pub mod config;
pub mod error;
pub mod keys;
pub mod logging;
pub mod manager;

pub use commands::{validate, Command, CommandGroup, CommandRegistry, CommandSpec};
pub use config::ManagerConfig;
pub use error::{CommandError, Result};
pub use keys::{is_canonical, normalize, KeyEvent, KeyToken, KeyboardEvent};
pub use manager::{CommandManager, CommandsScope, Container, KeyEventBus, ScopeGuard};
