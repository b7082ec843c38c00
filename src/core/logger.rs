//! Tracing initialization: one fmt layer teeing stdout and a log file.

use std::fs::OpenOptions;
use std::io;
use std::sync::Arc;

use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry,
};

/// Installs the global tracing subscriber.
///
/// Level comes from `RUST_LOG` (default `info`); load `.env` (e.g. via
/// `dotenvy::dotenv()`) before calling this or `RUST_LOG` from the file is
/// not seen. Output goes to stdout and to `log_file_path` in the same
/// format (level, target, span close events, all fields).
pub fn init_tracing(log_file_path: &str) -> anyhow::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)?;
    let file = Arc::new(file);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    use tracing_subscriber::fmt::writer::MakeWriterExt;
    let writer = io::stdout.and(file);

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_span_events(FmtSpan::CLOSE)
        .with_target(true)
        .with_level(true)
        .with_file(false)
        .with_line_number(false);

    Registry::default()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;

    Ok(())
}
