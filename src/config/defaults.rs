//! Default configuration values

/// Low-level event the manager listens for on its container
pub const DEFAULT_EVENT_NAME: &str = "keydown";

/// Suppress the event source's own handling when a command runs
pub const DEFAULT_PREVENT_DEFAULT: bool = true;

/// Log when a later group rebinds a key of an earlier group
pub const DEFAULT_WARN_ON_KEY_OVERRIDE: bool = true;

/// Log when a scope provides handlers for codes that are not registered
pub const DEFAULT_WARN_ON_UNKNOWN_SCOPE_CODES: bool = true;
