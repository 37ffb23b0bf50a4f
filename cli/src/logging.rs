//! Logging initialization.
//!
//! Reads `RUST_LOG` (filter, default `info`) and `LOG_FILE` (path). With `LOG_FILE` set, logs
//! are appended there as plain text via [`TextWithSpanIds`]. Otherwise the chat REPL drops
//! them so the terminal shows only the conversation, and the server writes them to stderr.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::log_format::TextWithSpanIds;

/// Where logs go when `LOG_FILE` is not set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fallback {
    Sink,
    Stderr,
}

pub fn init(fallback: Fallback) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,hyper=off,hyper_util=off"));

    if let Ok(path) = std::env::var("LOG_FILE") {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)?;
        let layer = tracing_subscriber::fmt::layer()
            .event_format(TextWithSpanIds::new())
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_filter(filter);
        tracing_subscriber::registry().with(layer).try_init()?;
        tracing::info!(path = %path, "talentscout logging to file");
        return Ok(());
    }

    match fallback {
        Fallback::Sink => tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::sink)
                    .with_filter(filter),
            )
            .try_init()?,
        Fallback::Stderr => tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_filter(filter),
            )
            .try_init()?,
    }
    Ok(())
}
