//! Structured JSONL logging plus human-readable stderr output.
//!
//! The library itself only emits `tracing` events. Hosts that have no
//! subscriber of their own can call `init` (or `init_with_dir`) once at
//! startup:
//!
//! ```rust,ignore
//! // Keep the guard alive for the duration of the program
//! let _guard = global_commands::logging::init()?;
//! ```
//!
//! # JSONL Output Format
//!
//! ```json
//! {"timestamp":"2026-01-05T10:30:45.123Z","level":"DEBUG","target":"global_commands::manager","fields":{"event_type":"dispatch","key":"ctrl+g","code":"open_drawer","scope_id":"scope#0","message":"Dispatching command"}}
//! ```

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// File name of the JSONL log inside the log directory
pub const LOG_FILE_NAME: &str = "global-commands.jsonl";

/// Guard that must be kept alive for the duration of the program.
/// Dropping this guard will flush and close the log file.
pub struct LoggingGuard {
    log_path: PathBuf,
    _file_guard: WorkerGuard,
}

impl LoggingGuard {
    pub fn log_path(&self) -> &Path {
        &self.log_path
    }
}

/// Initialize logging into the default log directory.
pub fn init() -> anyhow::Result<LoggingGuard> {
    init_with_dir(&default_log_dir())
}

/// Initialize the dual-output logging system, writing JSONL into `log_dir`.
///
/// Fails if the directory or file cannot be created, or if a global
/// subscriber is already installed.
pub fn init_with_dir(log_dir: &Path) -> anyhow::Result<LoggingGuard> {
    fs::create_dir_all(log_dir)
        .with_context(|| format!("failed to create log directory {}", log_dir.display()))?;

    let log_path = log_dir.join(LOG_FILE_NAME);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("failed to open log file {}", log_path.display()))?;

    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file);

    // Default to info, allow override via RUST_LOG
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let json_layer = fmt::layer()
        .json()
        .with_writer(non_blocking_file)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_target(true)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .with_line_number(false)
        .with_span_events(FmtSpan::NONE);

    let pretty_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(false)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(pretty_layer)
        .try_init()
        .context("a global tracing subscriber is already installed")?;

    tracing::info!(
        event_type = "logging_initialized",
        log_path = %log_path.display(),
        "Command logging initialized"
    );

    Ok(LoggingGuard {
        log_path,
        _file_guard: file_guard,
    })
}

/// `<data dir>/global-commands/logs`, falling back to the temp dir.
pub fn default_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("global-commands").join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("global-commands-logs"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn init_writes_jsonl_and_rejects_second_init() {
        let dir = tempdir().unwrap();
        let guard = init_with_dir(dir.path()).unwrap();
        let log_path = guard.log_path().to_path_buf();
        assert_eq!(log_path, dir.path().join(LOG_FILE_NAME));

        assert!(init_with_dir(dir.path()).is_err());

        tracing::warn!(event_type = "test_event", "hello from test");
        drop(guard);

        let contents = fs::read_to_string(&log_path).unwrap();
        let line = contents
            .lines()
            .find(|l| l.contains("hello from test"))
            .expect("test event should be logged");
        let value: serde_json::Value = serde_json::from_str(line).unwrap();
        assert_eq!(value["level"], "WARN");
        assert_eq!(value["fields"]["event_type"], "test_event");
    }

    #[test]
    fn default_log_dir_ends_with_logs() {
        let dir = default_log_dir();
        assert!(dir.ends_with("logs") || dir.ends_with("global-commands-logs"));
    }
}
