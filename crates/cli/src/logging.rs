use anyhow::{anyhow, Result};
use std::io::IsTerminal;
use std::path::Path;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;

/// Log files larger than this are truncated on startup.
const MAX_LOG_FILE_SIZE: u64 = 8 * 1024 * 1024;

/// Parses a log level case-insensitively, accepting `WARNING` and `CRITICAL`
/// as aliases of `WARN` and `ERROR`.
pub fn parse_level(level: &str) -> Result<Level, String> {
    match level.trim().to_ascii_uppercase().as_str() {
        "TRACE" => Ok(Level::TRACE),
        "DEBUG" => Ok(Level::DEBUG),
        "INFO" => Ok(Level::INFO),
        "WARN" | "WARNING" => Ok(Level::WARN),
        "ERROR" | "CRITICAL" => Ok(Level::ERROR),
        _ => Err(format!(
            "invalid log level `{level}`, expected one of DEBUG, INFO, WARNING, ERROR, CRITICAL"
        )),
    }
}

/// Installs the global subscriber writing to `log_file` if any, otherwise to stderr.
///
/// The returned guard must be kept alive until the program exits.
pub fn init_logging(max_level: Level, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let Some(log_path) = log_file else {
        let subscriber = tracing_subscriber::FmtSubscriber::builder()
            .with_max_level(max_level)
            .with_writer(std::io::stderr)
            .with_ansi(std::io::stderr().is_terminal())
            .finish();

        tracing::subscriber::set_global_default(subscriber)?;

        return Ok(None);
    };

    if let Ok(metadata) = std::fs::metadata(log_path) {
        if log_path.is_file() && metadata.len() > MAX_LOG_FILE_SIZE {
            std::fs::remove_file(log_path)?;
        }
    }

    let file_name = log_path
        .file_name()
        .ok_or_else(|| anyhow!("no file name in {log_path:?}"))?;

    let directory = match log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let file_appender = tracing_appender::rolling::never(directory, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(max_level)
        .with_line_number(true)
        .with_writer(non_blocking)
        .with_ansi(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    Ok(Some(guard))
}
