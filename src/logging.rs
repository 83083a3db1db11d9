use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::app::settings::user_cache_dir;

/// Environment variable holding the log filter (`EnvFilter` syntax).
pub const LOG_ENV: &str = "PAGEZOOM_LOG";

const LOG_FILE_NAME: &str = "pageZoom.log";

/// Default log file location inside the per-user cache directory.
pub fn default_log_file() -> Option<PathBuf> {
    user_cache_dir().map(|d| d.join(LOG_FILE_NAME))
}

/// Install a file-backed tracing subscriber.
///
/// The terminal belongs to the UI, so logs always go to a file. Returns the
/// writer guard, which must stay alive until exit so buffered lines are
/// flushed. Returns `Ok(None)` when no log location is available.
pub fn init(log_file: Option<&Path>) -> anyhow::Result<Option<WorkerGuard>> {
    let path = match log_file.map(Path::to_path_buf).or_else(default_log_file) {
        Some(p) => p,
        None => return Ok(None),
    };
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;
    let file_name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| LOG_FILE_NAME.into());

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))?;
    Ok(Some(guard))
}
