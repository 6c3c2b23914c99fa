//! Logging Infrastructure
//!
//! Console logging, optionally JSON, optionally mirrored to daily log files.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Initialize the logger with optional file output
///
/// `RUST_LOG` overrides `log_level`. The returned guard flushes the file
/// writer on drop and must be held for the life of the process.
pub fn init_logger_with_file(
    log_level: Option<&str>,
    json: bool,
    log_dir: Option<&str>,
) -> Option<WorkerGuard> {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    let file_writer = log_dir.and_then(|dir| {
        let log_path = Path::new(dir);
        if let Err(e) = std::fs::create_dir_all(log_path) {
            eprintln!("Cannot create log directory {dir}: {e}");
            return None;
        }
        let file_appender = tracing_appender::rolling::daily(log_path, "deliverus-server");
        Some(tracing_appender::non_blocking(file_appender))
    });

    match (file_writer, json) {
        (Some((writer, guard)), true) => {
            builder.json().with_writer(writer).init();
            Some(guard)
        }
        (Some((writer, guard)), false) => {
            builder.with_ansi(false).with_writer(writer).init();
            Some(guard)
        }
        (None, true) => {
            builder.json().init();
            None
        }
        (None, false) => {
            builder.init();
            None
        }
    }
}
