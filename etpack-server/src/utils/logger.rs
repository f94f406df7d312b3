//! Logging Infrastructure
//!
//! Structured logging setup with support for both development and production environments.

use std::io;
use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;

use crate::core::{Result, ServerError};

/// Ensure the log directory exists, creating it when missing
pub fn prepare_log_dir(dir: impl AsRef<Path>) -> io::Result<PathBuf> {
    let path = dir.as_ref();
    std::fs::create_dir_all(path)?;
    Ok(path.to_path_buf())
}

/// Initialize the logger with optional file output
///
/// `RUST_LOG` overrides `log_level` when set. JSON output defaults to on in
/// production only. A `log_dir` that cannot be created falls back to stdout
/// with a warning.
pub fn init_logger_with_file(
    log_level: Option<&str>,
    json: Option<bool>,
    log_dir: Option<&str>,
) -> Result<()> {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    // Add file output if log_dir is provided
    let dir_error = match log_dir.map(prepare_log_dir) {
        Some(Ok(path)) => {
            let file_appender = tracing_appender::rolling::daily(path, "etpack-server");
            let writer = builder.with_writer(file_appender).with_ansi(false);
            let result = if json.unwrap_or(false) {
                writer.json().try_init()
            } else {
                writer.try_init()
            };
            return result.map_err(|e| ServerError::Logger(e.to_string()));
        }
        Some(Err(e)) => Some(e),
        None => None,
    };

    let result = if json.unwrap_or(false) {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    result.map_err(|e| ServerError::Logger(e.to_string()))?;

    if let (Some(dir), Some(e)) = (log_dir, dir_error) {
        tracing::warn!(log_dir = %dir, error = %e, "Cannot create log directory, logging to stdout only");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepare_log_dir_creates_missing_dirs() {
        let root = tempfile::tempdir().unwrap();
        let nested = root.path().join("logs").join("server");

        let path = prepare_log_dir(&nested).unwrap();

        assert_eq!(path, nested);
        assert!(nested.is_dir());
        // Existing directory is fine too
        assert!(prepare_log_dir(&nested).is_ok());
    }

    #[test]
    fn test_prepare_log_dir_rejects_file_path() {
        let root = tempfile::tempdir().unwrap();
        let file = root.path().join("not-a-dir");
        std::fs::write(&file, "x").unwrap();

        assert!(prepare_log_dir(file.join("logs")).is_err());
    }
}
