use std::fs::{self, File};
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::Level;
use tracing_appender::non_blocking::{NonBlockingBuilder, WorkerGuard};
use tracing_subscriber::EnvFilter;

use crate::config::{LoggingConfig, ResolvedOutputs};

const TELEMETRY_FILE: &str = "telemetry.jsonl";

/// Keeps the background log writer alive; drop it last so buffered
/// events reach disk.
pub struct LoggingGuard {
    _worker: WorkerGuard,
    pub telemetry_path: PathBuf,
}

/// Where structured events for a run are written: beside the summary table.
pub fn telemetry_path(outputs: &ResolvedOutputs) -> PathBuf {
    match outputs.summary_md.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.join(TELEMETRY_FILE),
        _ => PathBuf::from(TELEMETRY_FILE),
    }
}

/// Installs the JSON subscriber. Returns `None` when structured logging is
/// disabled in the config.
pub fn init_logging(
    logging: &LoggingConfig,
    outputs: &ResolvedOutputs,
    run_id: &str,
) -> Result<Option<LoggingGuard>> {
    if !logging.enable_structured {
        return Ok(None);
    }

    let path = telemetry_path(outputs);
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating telemetry directory at {}", dir.display()))?;
    }
    let file = File::create(&path)
        .with_context(|| format!("creating telemetry file at {}", path.display()))?;
    let (writer, worker) = NonBlockingBuilder::default().lossy(false).finish(file);

    // RUST_LOG wins over the configured level when set.
    let level = logging.level().unwrap_or(Level::INFO);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .flatten_event(true)
        .with_current_span(false)
        .with_target(true)
        .with_writer(writer)
        .finish();

    // A subscriber may already be installed when running under tests.
    let _ = tracing::subscriber::set_global_default(subscriber);
    tracing::info!(run_id, level = %level, "structured logging enabled");

    Ok(Some(LoggingGuard {
        _worker: worker,
        telemetry_path: path,
    }))
}
