use std::fs;
use std::panic;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

pub const LOG_FILE_NAME: &str = "mock-classifier.log";

/// Keeps the file writer flushing until dropped.
pub struct TracingGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Install the global subscriber. `RUST_LOG` overrides the default `info`
/// filter; a log directory adds a daily-rolling file next to stdout.
pub fn init_tracing(log_dir: Option<&Path>) -> TracingGuard {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let stdout_layer = fmt::layer().with_writer(std::io::stdout);

    let file_writer = log_dir.and_then(file_appender).map(tracing_appender::non_blocking);

    match file_writer {
        Some((writer, guard)) => {
            let subscriber = Registry::default()
                .with(filter)
                .with(stdout_layer)
                .with(fmt::layer().with_ansi(false).with_writer(writer));
            let _ = tracing::subscriber::set_global_default(subscriber);
            TracingGuard {
                _file_guard: Some(guard),
            }
        }
        None => {
            let subscriber = Registry::default().with(filter).with(stdout_layer);
            let _ = tracing::subscriber::set_global_default(subscriber);
            TracingGuard { _file_guard: None }
        }
    }
}

/// Daily-rolling appender in `dir`, or `None` with a notice on stderr. The
/// subscriber is not installed yet, so stderr is the only place to report.
fn file_appender(dir: &Path) -> Option<RollingFileAppender> {
    if let Err(err) = fs::create_dir_all(dir) {
        eprintln!(
            "mock-classifier: cannot create log directory {}: {err}; logging to stdout only",
            dir.display()
        );
        return None;
    }

    // `rolling::daily` panics when the directory is not writable.
    match panic::catch_unwind(|| tracing_appender::rolling::daily(dir, LOG_FILE_NAME)) {
        Ok(appender) => Some(appender),
        Err(_) => {
            eprintln!(
                "mock-classifier: cannot open log file in {}; logging to stdout only",
                dir.display()
            );
            None
        }
    }
}
