//! Initialize journal use case

use crate::domain::Zone;
use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, JournalRepository};
use chrono::Weekday;
use std::fs;
use std::path::Path;
use tracing::info;

/// Initialize a new journal at the specified path.
pub fn init(path: &Path, timezone: Zone, week_start: Weekday) -> Result<Config> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());
    repo.initialize()?;

    let config = Config::new(timezone, week_start);
    repo.save_config(&config)?;

    info!(root = %path.display(), %timezone, "initialized journal");
    Ok(config)
}
