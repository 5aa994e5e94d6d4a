use std::io;

use anyhow::Result;
use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::{
    config::{AppConfig, LoggingConfig},
    infrastructure::directories::ResolvedPaths,
};

static INIT: OnceCell<()> = OnceCell::new();
static GUARD: OnceCell<tracing_appender::non_blocking::WorkerGuard> = OnceCell::new();

/// The rendered panel owns stdout, so console logs go to stderr and can be
/// switched off entirely with `LOG_CONSOLE=false`. The daily file is always on.
pub fn init_tracing(config: &AppConfig, paths: &ResolvedPaths) -> Result<()> {
    INIT.get_or_try_init::<_, anyhow::Error>(|| {
        let logging = &config.logging;
        let file_appender = tracing_appender::rolling::daily(&paths.logs_dir, &logging.file_name);
        let (file_writer, guard) = tracing_appender::non_blocking(file_appender);
        let _ = GUARD.set(guard);

        let console_layer = logging.console.then(|| {
            fmt::layer()
                .with_writer(io::stderr)
                .with_target(true)
                .with_ansi(true)
        });

        let file_layer = fmt::layer()
            .with_writer(file_writer)
            .with_target(true)
            .with_ansi(false);

        tracing_subscriber::registry()
            .with(env_filter(logging))
            .with(console_layer)
            .with(file_layer)
            .try_init()?;

        tracing::debug!(
            target: "app",
            logs = %paths.logs_dir.join(&logging.file_name).display(),
            console = logging.console,
            "tracing initialized"
        );
        Ok(())
    })?;
    Ok(())
}

/// `RUST_LOG` wins; then `LOG_LEVEL`; an unparseable level falls back to info.
fn env_filter(logging: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| level_filter(&logging.level))
}

fn level_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
}
