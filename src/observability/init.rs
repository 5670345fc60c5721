//! Tracing initialization and subscriber setup.
//!
//! Installs a `tracing-subscriber` registry with an [`EnvFilter`] and a JSON
//! formatting layer that writes one object per event to a rotating file.

use super::file_writer::RotatingFileWriter;
use crate::Config;
use std::path::Path;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// File name of the trace log inside the data directory.
pub const TRACE_FILE_NAME: &str = "docshelf-trace.json";

const DEFAULT_LEVEL: &str = "info";

/// Initializes tracing with JSON output to the data directory.
///
/// # Trace Level Resolution
///
/// 1. `RUST_LOG` environment variable (highest priority)
/// 2. `config.trace_level`
/// 3. Default: `"info"`
///
/// # Initialization Behavior
///
/// - Creates the data directory if it doesn't exist
/// - Silently gives up if that fails (observability is optional)
/// - Only the first call in a process takes effect
///
/// # Example
///
/// ```rust
/// use docshelf::observability::init_tracing;
/// use docshelf::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
/// init_tracing(&config);
///
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let data_dir = crate::infrastructure::paths::get_data_dir();
    init_tracing_in(&data_dir, config.trace_level.as_deref());
}

/// Same as [`init_tracing`] with an explicit directory for the trace file.
pub fn init_tracing_in(dir: &Path, trace_level: Option<&str>) {
    if std::fs::create_dir_all(dir).is_err() {
        return;
    }

    let writer = RotatingFileWriter::new(dir.join(TRACE_FILE_NAME));
    let subscriber = tracing_subscriber::registry()
        .with(env_filter(trace_level))
        .with(
            fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(false)
                .with_ansi(false)
                .with_writer(writer),
        );

    let _ = subscriber.try_init();
}

fn env_filter(trace_level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = trace_level.unwrap_or(DEFAULT_LEVEL);
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
    })
}
