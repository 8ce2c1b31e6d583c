//! Logging setup for the linepad host.
//!
//! The terminal belongs to the pad while it runs, so logs go to a file.
//!
//! ## Filter priority
//!
//! 1. **`LINEPAD_LOG`** - linepad-specific filter
//! 2. **`RUST_LOG`** - standard tracing filter
//! 3. The `[log] level` from the config file
//!
//! Default file: `<data_local_dir>/linepad/logs/linepad-<pid>.log`.

use std::{env, path::PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry};

use crate::error::{Error, Result};

/// Returned from [`init`]; dropping it flushes and stops the file writer.
pub struct LogGuard {
    _file_guard: WorkerGuard,
    pub log_file: PathBuf,
}

pub struct LogConfig {
    pub log_file_path: Option<PathBuf>,
    pub level: String,
}

pub fn init(config: LogConfig) -> Result<LogGuard> {
    let (log_dir, filename) = resolve_log_path(config.log_file_path);
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::never(&log_dir, &filename);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .with_filter(create_filter(&config.level));

    Registry::default()
        .with(file_layer)
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))?;

    Ok(LogGuard {
        _file_guard: file_guard,
        log_file: log_dir.join(filename),
    })
}

/// Stdout logging for tests. Safe to call more than once.
pub fn test() {
    let _ = fmt()
        .with_env_filter(create_filter("debug"))
        .with_test_writer()
        .try_init();
}

fn resolve_log_path(override_path: Option<PathBuf>) -> (PathBuf, String) {
    let filename = format!("linepad-{}.log", std::process::id());

    if let Some(path) = override_path {
        if path.extension().is_some() {
            let dir = path
                .parent()
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("."));
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or(filename);
            return (dir, name);
        }
        return (path, filename);
    }

    let dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("linepad")
        .join("logs");
    (dir, filename)
}

fn create_filter(default_level: &str) -> EnvFilter {
    if let Ok(filter) = env::var("LINEPAD_LOG") {
        return expand_linepad_log(&filter);
    }
    if let Ok(filter) = env::var("RUST_LOG") {
        return EnvFilter::new(filter);
    }
    expand_linepad_log(default_level)
}

/// `debug` becomes `warn,linepad=debug`; anything with module syntax is used as-is.
fn expand_linepad_log(value: &str) -> EnvFilter {
    if value.contains('=') || value.contains(',') {
        return EnvFilter::new(value);
    }
    EnvFilter::new(format!("warn,linepad={value}"))
}
