use std::path::Path;

use config::ServiceConfig;
use thiserror::Error;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid log level '{level}': {source}")]
    InvalidLogLevel {
        level: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("Failed to create log directory: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to create rolling file appender: {0}")]
    AppenderError(#[from] tracing_appender::rolling::InitError),
}

/// Initialize the process-wide tracing subscriber.
///
/// The transport is decided once, from the environment mode:
/// - Production: JSON log lines written through a non-blocking worker
///   into a daily-rolled file under `config.log.directory`. Files are
///   named `log.YYYY-MM-DD.json`; the directory is created if absent.
/// - Otherwise: colorized human-readable output on stdout.
///
/// There is no runtime switching and no fallback: if the chosen
/// transport cannot be initialized the error propagates to `main` and
/// startup fails.
pub fn init(config: &ServiceConfig) -> Result<(), LoggingError> {
    let level = config.log.effective_level(config.environment);

    let filter = EnvFilter::try_new(level).map_err(|source| LoggingError::InvalidLogLevel {
        level: level.to_string(),
        source,
    })?;

    let registry = tracing_subscriber::registry();

    if config.is_production() {
        // Ensure log directory exists
        std::fs::create_dir_all(&config.log.directory)?;

        let file_appender = RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix("log")
            .filename_suffix("json")
            .build(Path::new(&config.log.directory))?;

        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        // We need to keep the guard alive for the lifetime of the program
        // Leak it to prevent dropping
        std::mem::forget(guard);

        let file_layer = fmt::layer().json().with_ansi(false).with_writer(non_blocking);

        registry.with(filter).with(file_layer).init();
    } else {
        let console_layer = fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(true);

        registry.with(filter).with(console_layer).init();
    }

    Ok(())
}
