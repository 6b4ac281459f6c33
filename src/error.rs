use thiserror::Error;

/// Error severity, used by hosts to decide how loudly to report a failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Warning, // recoverable, e.g. a container selector that did not resolve
    Error,   // command set must not be used for dispatch
}

/// Errors raised while building, validating, or wiring up commands.
///
/// Validation variants carry every offender for their rule, not just the first.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Invalid command group '{group}': {message}")]
    InvalidShape { group: String, message: String },

    #[error("Invalid container: {0}")]
    InvalidContainer(String),

    #[error("Commands without description {}", .codes.join(", "))]
    MissingDescription { codes: Vec<String> },

    #[error("Duplicated keys {}", .keys.join(", "))]
    DuplicateKey { keys: Vec<String> },

    #[error("Duplicated codes {}", .codes.join(", "))]
    DuplicateCode { codes: Vec<String> },

    #[error(
        "Invalid codes {}. Codes must be lowercase letters, numbers and underscores, starting with a letter",
        .codes.join(", ")
    )]
    InvalidCode { codes: Vec<String> },

    #[error(
        "Invalid key(s) {}. Keys must follow the pattern in that order ctrl+shift+alt+key. All must be lowercase. And must have a non modifier key",
        .keys.join(", ")
    )]
    InvalidKey { keys: Vec<String> },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl CommandError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidContainer(_) | Self::Config(_) => ErrorSeverity::Warning,
            _ => ErrorSeverity::Error,
        }
    }

    /// Codes or keys this error is about, in report order.
    pub fn offenders(&self) -> &[String] {
        match self {
            Self::MissingDescription { codes }
            | Self::DuplicateCode { codes }
            | Self::InvalidCode { codes } => codes,
            Self::DuplicateKey { keys } | Self::InvalidKey { keys } => keys,
            Self::InvalidShape { .. } | Self::InvalidContainer(_) | Self::Config(_) => &[],
        }
    }
}

pub type Result<T> = std::result::Result<T, CommandError>;
