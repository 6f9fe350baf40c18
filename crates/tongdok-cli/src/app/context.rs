//! Application context for the Tongdok CLI.
//!
//! Bundles the parsed CLI arguments with the lazily loaded config file so
//! handlers do not thread paths and settings through every call.

use std::path::PathBuf;

use chrono::{Local, NaiveDate, Utc};
use chrono_tz::Tz;
use once_cell::unsync::OnceCell;

use tongdok_core::storage::SqliteStorage;
use tongdok_core::StorageEngine;

use crate::cli::Cli;
use crate::config::TongdokConfig;
use crate::logging::{resolve_format, LoggingConfig, DEFAULT_LEVEL};
use crate::ui::UiContext;

use super::resolver::{load_config, resolve_config_path, resolve_db_path};

pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<TongdokConfig>,
}

impl<'a> AppContext<'a> {
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// The config file, loaded on first use.
    pub fn config(&self) -> anyhow::Result<&TongdokConfig> {
        self.config
            .get_or_try_init(|| load_config(&resolve_config_path()?))
    }

    pub fn db_path(&self) -> anyhow::Result<PathBuf> {
        resolve_db_path(self.cli, self.config()?)
    }

    /// Open (creating if needed) the reading database.
    pub fn open_storage(&self) -> anyhow::Result<SqliteStorage> {
        let path = self.db_path()?;
        tracing::debug!(path = %path.display(), "opening database");
        Ok(SqliteStorage::open(&path)?)
    }

    /// Today's date in the configured timezone, or the system zone.
    pub fn today(&self) -> anyhow::Result<NaiveDate> {
        match self.config()?.ui.timezone.as_deref() {
            Some(name) => {
                let tz: Tz = name
                    .parse()
                    .map_err(|e| anyhow::anyhow!("Unknown timezone {}: {}", name, e))?;
                Ok(Utc::now().with_timezone(&tz).date_naive())
            }
            None => Ok(Local::now().date_naive()),
        }
    }

    pub fn ui_context(&self, json: bool) -> UiContext {
        UiContext::from_env(json, self.cli.plain, self.cli.no_color, self.cli.ascii)
    }

    /// Logging settings; a broken config file falls back to defaults.
    pub fn logging_config(&self) -> LoggingConfig {
        let (level, format) = match self.config() {
            Ok(config) => (config.logging.level.clone(), config.logging.format.clone()),
            Err(_) => (None, None),
        };
        LoggingConfig::new(
            resolve_format(format.as_deref()),
            level.unwrap_or_else(|| DEFAULT_LEVEL.to_string()),
            self.cli.verbose,
        )
    }
}
