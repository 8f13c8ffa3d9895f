// File: ./src/logging.rs
// File logger for front-ends embedding the engine.
use crate::context::AppContext;
use anyhow::{Context, Result};
use simplelog::{Config, LevelFilter, WriteLogger};
use std::fs::OpenOptions;
use std::path::PathBuf;

/// Installs a global `simplelog` logger appending to the context's log file.
/// Returns the log file path. Fails if a logger is already installed.
pub fn init(ctx: &dyn AppContext, level: LevelFilter) -> Result<PathBuf> {
    let path = ctx.get_log_file_path()?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file: {:?}", path))?;

    WriteLogger::init(level, Config::default(), file)
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {}", e))?;

    log::info!("Logging to {}", path.display());
    Ok(path)
}
