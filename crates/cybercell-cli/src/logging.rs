//! Logging setup for the binary.
//!
//! Console commands log to stderr. The interactive browser owns the
//! terminal, so it logs to a file in the data directory instead.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Result;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::types::LogLevel;

pub const LOG_FILE: &str = "cybercell.log";

/// Where log lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    Stderr,
    File(PathBuf),
}

impl LogSink {
    pub fn file_in(data_dir: &Path) -> Self {
        LogSink::File(data_dir.join(LOG_FILE))
    }
}

/// Build the filter: `RUST_LOG` wins over `--log-level`.
pub fn env_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()))
}

/// Initialize the global subscriber. Later calls are ignored.
pub fn init_logging(level: LogLevel, sink: LogSink) -> Result<()> {
    let filter = env_filter(level);

    // A subscriber already in place (tests, repeated runs in one process) keeps logging
    let installed = match sink {
        LogSink::Stderr => tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(false)
                    .with_line_number(false),
            )
            .try_init(),
        LogSink::File(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(&path)?;
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_writer(Mutex::new(file))
                        .with_ansi(false)
                        .with_target(true),
                )
                .try_init()
        }
    };
    if let Err(err) = installed {
        debug!(%err, "logging already initialized, keeping the existing subscriber");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_sink_file_in() {
        let sink = LogSink::file_in(Path::new("/tmp/cc"));
        assert_eq!(sink, LogSink::File(PathBuf::from("/tmp/cc/cybercell.log")));
    }

    #[test]
    fn test_init_logging_to_file_does_not_panic() -> Result<()> {
        let dir = tempfile::TempDir::new()?;
        init_logging(LogLevel::Debug, LogSink::file_in(dir.path()))?;
        // A second call is ignored
        init_logging(LogLevel::Info, LogSink::Stderr)?;
        assert!(dir.path().join(LOG_FILE).exists());
        Ok(())
    }
}
