//! Configuration module - Dispatch settings for a command manager
//!
//! # Module Structure
//!
//! - `defaults` - All default constant values
//! - `types` - Configuration struct definitions (ManagerConfig)

mod defaults;
mod types;

pub use defaults::DEFAULT_EVENT_NAME;
pub use types::ManagerConfig;

#[cfg(test)]
pub use defaults::{
    DEFAULT_PREVENT_DEFAULT, DEFAULT_WARN_ON_KEY_OVERRIDE, DEFAULT_WARN_ON_UNKNOWN_SCOPE_CODES,
};

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
