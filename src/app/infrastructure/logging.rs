//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use super::error::Result;

/// Environment variable controlling the log filter.
pub const LOG_ENV: &str = "VITRINA_LOG";

/// Initialize the logging subsystem
///
/// Logs are written to `<data_local_dir>/vitrina/logs/`.
/// Log level is controlled by the `VITRINA_LOG` environment variable.
///
/// # Examples
/// ```bash
/// VITRINA_LOG=debug my-host-binary
/// VITRINA_LOG=vitrina=trace my-host-binary
/// ```
pub fn init() -> Result<()> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "vitrina.log");

    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("vitrina=info,warn"));

    // A host may already have installed a subscriber; keep theirs.
    let installed = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("Vitrina starting, log directory: {}", log_dir.display());
    }

    Ok(())
}

/// Get the log directory path
pub fn log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("vitrina").join("logs")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_directory_ends_with_app_name() {
        let dir = log_directory();
        assert!(dir.ends_with("vitrina/logs"));
    }
}
