// caja-cli/src/logging.rs
// Tracing setup - stderr plus an optional daily log file

use std::io::IsTerminal;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "warn,caja_client=info,caja_cli=info";

/// Rolling log file prefix inside `CAJA_LOG_DIR`
const LOG_FILE: &str = "caja.log";

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

/// Install the global subscriber.
///
/// The returned guard flushes the file writer and must live until exit.
pub fn init(log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let mut guard = None;
    let file_layer = log_dir.and_then(|dir| {
        if let Err(e) = std::fs::create_dir_all(dir) {
            eprintln!("warning: cannot create log directory {}: {e}", dir.display());
            return None;
        }
        let (writer, g) = tracing_appender::non_blocking(rolling::daily(dir, LOG_FILE));
        guard = Some(g);
        Some(
            fmt::layer()
                .with_timer(LocalTimer)
                .with_ansi(false)
                .with_target(true)
                .with_level(true)
                .with_file(true)
                .with_line_number(true)
                .with_thread_ids(true)
                .with_writer(writer),
        )
    });

    let stderr_layer = fmt::layer()
        .with_timer(LocalTimer)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer)
        .init();

    if let Some(dir) = log_dir {
        tracing::debug!(path = %dir.display(), "File logging enabled");
    }
    guard
}
