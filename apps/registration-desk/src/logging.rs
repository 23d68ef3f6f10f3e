//! Logging setup: a stderr layer plus an optional file layer, both in one
//! registry.

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

use crate::config::LoggingConfig;

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Installs the global subscriber.
///
/// `RUST_LOG` overrides `console_level` for the stderr layer. The returned
/// guard flushes the file writer on drop and must live until exit.
pub fn init_logging(cfg: &LoggingConfig, home_dir: &Path) -> Result<Option<WorkerGuard>> {
    let mut layers: Vec<BoxedLayer> = vec![console_layer(cfg)];

    let guard = file_layer(cfg, home_dir)?.map(|(layer, guard)| {
        layers.push(layer);
        guard
    });

    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .context("failed to install the tracing subscriber")?;
    Ok(guard)
}

fn console_layer(cfg: &LoggingConfig) -> BoxedLayer {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.console_level));
    if cfg.json {
        fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_filter(filter)
            .boxed()
    } else {
        fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr)
            .with_filter(filter)
            .boxed()
    }
}

fn file_layer(cfg: &LoggingConfig, home_dir: &Path) -> Result<Option<(BoxedLayer, WorkerGuard)>> {
    let Some(file) = &cfg.file else {
        return Ok(None);
    };
    let path = if file.is_absolute() {
        file.clone()
    } else {
        home_dir.join(file)
    };
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir)
        .with_context(|| format!("cannot create log directory {}", dir.display()))?;
    let name = path
        .file_name()
        .with_context(|| format!("log file path has no file name: {}", path.display()))?;

    let appender = tracing_appender::rolling::never(dir, name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let filter = EnvFilter::new(&cfg.file_level);
    let layer = if cfg.json {
        fmt::layer()
            .json()
            .with_writer(writer)
            .with_filter(filter)
            .boxed()
    } else {
        fmt::layer()
            .with_ansi(false)
            .with_writer(writer)
            .with_filter(filter)
            .boxed()
    };
    Ok(Some((layer, guard)))
}
