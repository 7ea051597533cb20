//! File System Utilities
//!
//! Configuration, data and cache directory management.

use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "ah", "ah-kit").ok_or_else(|| Error::Invalid {
        message: "Could not determine project directories".to_string(),
    })
}

fn ensure_dir(dir: &Path) -> Result<PathBuf> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(dir.to_path_buf())
}

/// Get or create the configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/ah-kit/` or `$XDG_CONFIG_HOME/ah-kit/`
/// - **macOS**: `~/Library/Application Support/com.ah.ah-kit/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\ah\ah-kit\config\`
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    ensure_dir(project_dirs()?.config_dir())
}

/// Get or create the data directory (log files)
pub fn get_or_create_data_dir() -> Result<PathBuf> {
    ensure_dir(project_dirs()?.data_dir())
}

/// Get or create the cache directory
///
/// Anything persisted here is disposable and is wiped when a module recovers
/// from a render fault.
pub fn get_or_create_cache_dir() -> Result<PathBuf> {
    ensure_dir(project_dirs()?.cache_dir())
}

/// Remove everything inside `dir`, keeping the directory itself
pub fn purge_dir(dir: &Path) -> Result<usize> {
    if !dir.exists() {
        return Ok(0);
    }

    let mut removed = 0;
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            fs::remove_dir_all(&path)?;
        } else {
            fs::remove_file(&path)?;
        }
        removed += 1;
    }
    Ok(removed)
}

/// Wipe the persisted cache
pub fn purge_cache_dir() -> Result<()> {
    let dir = get_or_create_cache_dir()?;
    let removed = purge_dir(&dir)?;
    info!(path = ?dir, removed, "Purged cache directory");
    Ok(())
}
