use std::path::Path;

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const LOG_DIR: &str = "logs";
const LOG_FILE: &str = "hero_scout.log";

/// Non-blocking writer for a daily-rotated log file in `dir`.
/// Fails instead of panicking when `dir` cannot be created.
fn daily_file_writer(dir: &Path) -> Result<(NonBlocking, WorkerGuard), InitError> {
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE)
        .build(dir)?;
    Ok(tracing_appender::non_blocking(appender))
}

/// Initializes the logging system with both console and file output.
///
/// Console output goes to stderr so that stdout only carries the selected
/// record. If the log directory is unusable, only the console layer is kept.
pub fn init_logging() {
    let (file_layer, file_error) = match daily_file_writer(Path::new(LOG_DIR)) {
        Ok((writer, guard)) => {
            // Keep the guard alive so buffered lines are flushed on exit
            std::mem::forget(guard);
            (Some(fmt::layer().json().with_writer(writer)), None)
        }
        Err(e) => (None, Some(e)),
    };

    let console_layer = fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);

    // Respect RUST_LOG if set; otherwise info for our crate
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("hero_scout=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .init();

    if let Some(e) = file_error {
        tracing::warn!("File logging disabled, cannot use '{}': {}", LOG_DIR, e);
    }
}
