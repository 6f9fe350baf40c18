//! Path resolution for the config file and the reading database.

use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::config::{default_config_path, default_db_path, read_config, TongdokConfig};

/// Resolve the config file path, checking TONGDOK_CONFIG first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("TONGDOK_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Load the config file. A missing file yields the defaults.
pub fn load_config(path: &Path) -> anyhow::Result<TongdokConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(TongdokConfig::default());
    }
    read_config(path)
}

/// Database path: `--db` / TONGDOK_DB, then the config file, then the XDG default.
pub fn resolve_db_path(cli: &Cli, config: &TongdokConfig) -> anyhow::Result<PathBuf> {
    if let Some(path) = cli.db.as_deref().filter(|p| !p.trim().is_empty()) {
        return Ok(PathBuf::from(path));
    }
    if let Some(path) = config.storage.path.as_deref() {
        return Ok(PathBuf::from(path));
    }
    default_db_path()
}
