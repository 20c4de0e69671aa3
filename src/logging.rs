//! File logging. The terminal belongs to the UI, so log output only ever
//! goes to a file.

use std::fs::OpenOptions;
use std::path::Path;

use env_logger::{Builder, Target};
use log::LevelFilter;

use crate::error::{AppError, Result};

/// Map a config level name onto a filter. Unknown names mean `Info`.
pub fn parse_level(level: &str) -> LevelFilter {
    level.parse().unwrap_or(LevelFilter::Info)
}

/// Install a logger appending to `path`.
pub fn init(path: &Path, level: &str) -> Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Builder::new()
        .filter_level(parse_level(level))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))?;
    Ok(())
}
