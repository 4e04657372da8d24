//! Logging initialization: human-readable format (timestamp, level, target, message, fields) to the
//! console, teed to a log file outside debug mode.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{
    fmt::format::{FmtSpan, Writer},
    fmt::time::FormatTime,
    fmt::writer::{BoxMakeWriter, MakeWriterExt},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

/// Local time in `YYYY-MM-DD HH:MM:SS` for human-readable log lines.
struct ChronoLocal;

impl FormatTime for ChronoLocal {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        let t = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        write!(w, "{} ", t)
    }
}

/// Where and how verbosely to log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    /// Level name as configured (`DEBUG`, `INFO`, `WARNING`, ...).
    pub level: String,
    pub file: Option<String>,
    /// Debug mode logs to the console only.
    pub debug: bool,
}

impl LogSettings {
    /// Log file in effect: none in debug mode or when no (non-empty) path is configured.
    pub fn file_sink(&self) -> Option<&str> {
        if self.debug {
            return None;
        }
        self.file.as_deref().filter(|path| !path.trim().is_empty())
    }

    /// Filter used when `RUST_LOG` is unset; teloxide is kept at `warn`.
    pub fn default_filter(&self) -> String {
        format!("{},teloxide=warn", level_directive(&self.level))
    }
}

/// Maps a level name (case-insensitive) to a tracing directive. Unknown names fall back to `info`.
pub fn level_directive(level: &str) -> &'static str {
    match level.trim().to_ascii_uppercase().as_str() {
        "TRACE" => "trace",
        "DEBUG" => "debug",
        "INFO" => "info",
        "WARN" | "WARNING" => "warn",
        "ERROR" | "CRITICAL" | "FATAL" => "error",
        _ => "info",
    }
}

/// Opens `path` for appending, creating missing parent directories.
fn open_log_file(path: &str) -> io::Result<File> {
    if let Some(parent) = Path::new(path)
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
    {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Initializes the global tracing subscriber.
///
/// Output is `YYYY-MM-DD HH:MM:SS LEVEL target: message key=value ...` on stdout, teed to the log file
/// from [`LogSettings::file_sink`]. No ANSI codes so the file stays plain text. `RUST_LOG` overrides the
/// configured level.
pub fn init_tracing(settings: &LogSettings) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.default_filter()));

    let writer = match settings.file_sink() {
        Some(path) => {
            let file = Arc::new(open_log_file(path)?);
            BoxMakeWriter::new(io::stdout.and(file))
        }
        None => BoxMakeWriter::new(io::stdout),
    };

    let event_format = tracing_subscriber::fmt::format()
        .with_timer(ChronoLocal)
        .with_level(true)
        .with_target(true)
        .with_thread_ids(false);

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .event_format(event_format)
        .with_span_events(FmtSpan::NONE)
        .with_ansi(false);

    Registry::default()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;

    info!("Logging configured successfully");
    info!(level = %settings.level, "Log level");
    if let Some(path) = settings.file_sink() {
        info!(log_file = %path, "Log file");
    }

    Ok(())
}
