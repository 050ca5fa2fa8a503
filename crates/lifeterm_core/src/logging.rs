//! Diagnostic log sink.
//!
//! The terminal belongs to the renderer, so all events go to an append-only
//! file. The level comes from [`LoggingConfig`] and is fixed at startup.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Installs the global tracing subscriber writing to `config.path`.
pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<()> {
    let level = config.level_filter()?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.path)
        .with_context(|| format!("Error opening log file {}", config.path))?;

    tracing_subscriber::registry()
        .with(EnvFilter::default().add_directive(level.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_file(true)
                .with_line_number(true),
        )
        .try_init()
        .context("Logging already initialized")?;
    Ok(())
}
