//! File logging
//!
//! The terminal belongs to the UI, so logs only ever go to a file. Without
//! `--log-file` no subscriber is installed and `tracing` macros are no-ops.

use std::io;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset or invalid
pub const DEFAULT_FILTER: &str = "info";

/// Install a non-blocking file subscriber.
///
/// Returns the writer guard; dropping it flushes and stops the writer thread,
/// so keep it alive for as long as the app runs.
pub fn init(log_file: Option<&Path>) -> io::Result<Option<WorkerGuard>> {
    let Some(log_file) = log_file else {
        return Ok(None);
    };

    let log_dir = log_file
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let log_filename = log_file.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("log file path has no file name: {}", log_file.display()),
        )
    })?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(log_filename.to_string_lossy())
        .build(log_dir)
        .map_err(io::Error::other)?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let file_layer = fmt::Layer::default()
        .with_target(true)
        .with_ansi(false)
        .with_writer(non_blocking);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .map_err(io::Error::other)?;

    Ok(Some(guard))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_path_installs_nothing() {
        assert!(init(None).unwrap().is_none());
    }

    #[test]
    fn test_path_without_file_name_is_rejected() {
        let err = init(Some(Path::new("/"))).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
