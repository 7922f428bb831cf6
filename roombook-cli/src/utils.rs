//! Utility functions for CLI operations.
//!
//! Data directory resolution, configuration loading and opening the
//! booking service.

use crate::error::CliError;
use roombook::clock::SystemClock;
use roombook::database::{default_data_dir, DATABASE_FILE_NAME};
use roombook::{Config, ConfigBuilder, DatabaseConfig, ReservationService};
use std::path::PathBuf;
use std::time::Duration;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the busy timeout (in seconds).
    pub busy_timeout: Option<u64>,

    /// Disable automatic database initialization.
    pub disable_autoinit: bool,
}

/// Resolve the data directory.
///
/// Priority: `--data-dir` (or `ROOMBOOK_DATA_DIR`) > `~/.roombook`.
pub fn resolve_data_dir(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    match global.data_dir {
        Some(ref dir) => Ok(dir.clone()),
        None => default_data_dir().map_err(|e| CliError::Config(e.to_string())),
    }
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Environment variables
/// 2. `config.yaml` in the data directory
/// 3. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let data_dir = resolve_data_dir(global)?;
    log::debug!("loading configuration from {}", data_dir.display());

    ConfigBuilder::new()
        .with_data_dir(data_dir)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Open the booking service over the configured store.
///
/// # Errors
///
/// Returns `NoDataDirectory` if the database doesn't exist and auto-init is
/// disabled by flag or configuration.
pub fn open_service(
    global: &GlobalOptions,
    config: &Config,
) -> Result<ReservationService<SystemClock>, CliError> {
    let db_path = resolve_data_dir(global)?.join(DATABASE_FILE_NAME);

    if !db_path.exists() && (global.disable_autoinit || config.autoinit_disabled()) {
        return Err(CliError::NoDataDirectory);
    }

    log::debug!("opening reservation store at {}", db_path.display());

    let busy_timeout = global
        .busy_timeout
        .map_or_else(|| config.lock_wait(), Duration::from_secs);
    let db_config = DatabaseConfig::new(db_path).with_busy_timeout(busy_timeout);

    ReservationService::open(db_config, &config.room_registry(), SystemClock).map_err(CliError::from)
}
