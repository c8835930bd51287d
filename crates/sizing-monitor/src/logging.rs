//! Logging setup.

use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Setup logging with the given level.
///
/// Console output goes to stderr so reports on stdout stay parseable.
/// Pass `console = false` while a full-screen UI owns the terminal.
/// When `file` is set, logs are also appended there; keep the returned
/// guard alive until exit so buffered lines are flushed.
pub fn setup_logging(
    level: &str,
    json: bool,
    console: bool,
    file: Option<&Path>,
) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let (file_layer, guard) = match file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let name = path
                .file_name()
                .map(|n| n.to_os_string())
                .unwrap_or_else(|| "sizing.log".into());
            let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, name));
            (
                Some(fmt::layer().with_ansi(false).with_writer(writer)),
                Some(guard),
            )
        }
        None => (None, None),
    };

    let (json_layer, pretty_layer) = match (console, json) {
        (false, _) => (None, None),
        (true, true) => (Some(fmt::layer().json().with_writer(std::io::stderr)), None),
        (true, false) => (None, Some(fmt::layer().pretty().with_writer(std::io::stderr))),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(pretty_layer)
        .with(file_layer)
        .init();

    guard
}
