//! Tracing setup.
//!
//! The TUI owns stdout, so logs only ever go to a file in the platform data
//! directory (e.g. `~/.local/share/linkcard/logs/linkcard.log` on Linux).
//! `RUST_LOG` takes precedence over the configured level.

use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{APP_NAME, AppConfig};

/// Log file name inside the log directory.
const LOG_FILE_NAME: &str = "linkcard.log";

/// Directory log files are written to, if the platform has a data directory.
#[must_use]
pub fn log_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join(APP_NAME).join("logs"))
}

/// Builds the level filter: `RUST_LOG` if set, else the configured level.
fn build_filter(config: &AppConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::try_new(format!("{APP_NAME}={}", config.log_level))
            .unwrap_or_else(|_| EnvFilter::new(format!("{APP_NAME}=info")))
    })
}

/// Installs the global subscriber.
///
/// Returns the writer guard; keep it alive until exit so buffered lines are
/// flushed. Returns `None` when file logging is disabled or unavailable.
#[must_use]
pub fn init(config: &AppConfig) -> Option<WorkerGuard> {
    if !config.log_to_file {
        return None;
    }

    let Some(dir) = log_dir() else {
        eprintln!("Warning: no data directory, logging disabled");
        return None;
    };

    if let Err(e) = std::fs::create_dir_all(&dir) {
        eprintln!(
            "Warning: could not create log directory {}: {e}",
            dir.display()
        );
        return None;
    }

    let file_appender = tracing_appender::rolling::never(&dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let result = tracing_subscriber::registry()
        .with(build_filter(config))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false),
        )
        .try_init();

    if let Err(e) = result {
        eprintln!("Warning: logging already initialised: {e}");
    }

    Some(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_dir_is_namespaced() {
        if let Some(dir) = log_dir() {
            assert!(dir.ends_with("linkcard/logs"));
        }
    }

    #[test]
    fn test_disabled_file_logging_installs_nothing() {
        let config = AppConfig {
            log_to_file: false,
            ..AppConfig::default()
        };
        assert!(init(&config).is_none());
    }

    #[test]
    fn test_bad_level_falls_back() {
        let config = AppConfig {
            log_level: "not a level[".to_string(),
            ..AppConfig::default()
        };
        // Must not panic whatever RUST_LOG holds
        let _filter = build_filter(&config);
    }
}
