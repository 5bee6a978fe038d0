//! Logging setup using tracing.
//!
//! The terminal is owned by the UI, so log output goes to a daily rolling
//! file under the platform data directory (`.../yield-architect/logs/`).
//! The filter is read from `YIELD_ARCHITECT_LOG`:
//!
//! ```bash
//! YIELD_ARCHITECT_LOG=debug yield-architect
//! ```

use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::Result;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "YIELD_ARCHITECT_LOG";

const LOG_FILE_PREFIX: &str = "yield-architect.log";

/// Initialize the logging subsystem.
///
/// The returned guard flushes the background writer when dropped and must be
/// kept alive for the lifetime of the program.
pub fn init(log_dir: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("yield_architect=info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true),
        )
        .try_init()
        .map_err(|e| crate::Error::application(e.to_string()))?;

    tracing::info!("Yield Architect starting");
    tracing::info!("Log directory: {}", log_dir.display());

    Ok(guard)
}
