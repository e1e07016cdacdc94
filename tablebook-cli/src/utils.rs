//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including data directory resolution, configuration loading, store
//! management, and argument parsing.

use crate::error::CliError;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tablebook::database::{default_data_dir, DATABASE_FILE_NAME};
use tablebook::{Config, ConfigBuilder, Database, DatabaseConfig};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds).
    pub busy_timeout: Option<u32>,

    /// Disable automatic store initialization.
    pub disable_autoinit: bool,
}

/// Resolve the data directory: `--data-dir` / `TABLEBOOK_DATA_DIR`, else
/// `~/.tablebook`.
pub fn resolve_data_dir(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    match global.data_dir {
        Some(ref dir) => Ok(dir.clone()),
        None => default_data_dir().map_err(|e| CliError::Config(e.to_string())),
    }
}

/// Load layered configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. `{data_dir}/config.yaml`
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let data_dir = resolve_data_dir(global)?;
    let mut builder = ConfigBuilder::new().with_data_dir(&data_dir);

    if global.disable_autoinit {
        builder = builder.with_config(Config {
            disable_autoinit: Some(true),
            ..Default::default()
        });
    }

    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

/// Store settings for the resolved data directory.
///
/// # Errors
///
/// Returns `NoDataDirectory` if the store doesn't exist and auto-init is disabled.
pub fn database_config(
    global: &GlobalOptions,
    config: &Config,
) -> Result<DatabaseConfig, CliError> {
    let db_path = resolve_data_dir(global)?.join(DATABASE_FILE_NAME);

    if !db_path.exists() && config.autoinit_disabled() {
        return Err(CliError::NoDataDirectory);
    }

    let timeout = global
        .busy_timeout
        .map_or_else(|| config.lock_wait(), |seconds| Duration::from_secs(seconds.into()));

    Ok(DatabaseConfig::new(db_path).with_busy_timeout(timeout))
}

/// Open the store with configuration.
///
/// # Errors
///
/// Returns `NoDataDirectory` if the store doesn't exist and auto-init is disabled.
pub fn open_database(global: &GlobalOptions, config: &Config) -> Result<Database, CliError> {
    Database::open(database_config(global, config)?).map_err(CliError::from)
}

/// Parse a date given as `YYYY-MM-DD` or `DD-MM-YYYY`.
pub fn parse_date_arg(value: &str) -> Result<NaiveDate, String> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(value, "%d-%m-%Y"))
        .map_err(|_| format!("invalid date '{value}' (expected YYYY-MM-DD or DD-MM-YYYY)"))
}

/// Shorten a path for display.
///
/// If the path is within the home directory, show it as ~/...
/// Otherwise, show the full path.
pub fn shorten_path(path: &Path) -> String {
    if let Some(home) = home::home_dir() {
        if let Ok(relative) = path.strip_prefix(&home) {
            return format!("~/{}", relative.display());
        }
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_arg_formats() {
        let expected = NaiveDate::from_ymd_opt(2099, 3, 14).unwrap();
        assert_eq!(parse_date_arg("2099-03-14").unwrap(), expected);
        assert_eq!(parse_date_arg("14-03-2099").unwrap(), expected);
        assert_eq!(parse_date_arg(" 2099-03-14 ").unwrap(), expected);
        assert!(parse_date_arg("14/03/2099").is_err());
        assert!(parse_date_arg("2099-02-30").is_err());
    }

    #[test]
    fn test_shorten_path_outside_home() {
        let path = PathBuf::from("/usr/local/bin");
        assert_eq!(shorten_path(&path), "/usr/local/bin");
    }

    #[test]
    fn test_database_config_respects_autoinit() {
        let temp = tempfile::tempdir().unwrap();
        let global = GlobalOptions {
            data_dir: Some(temp.path().to_path_buf()),
            ..Default::default()
        };
        let config = Config {
            disable_autoinit: Some(true),
            ..Default::default()
        };

        let err = database_config(&global, &config).unwrap_err();
        assert_eq!(err.exit_code(), 3);

        let db_config = database_config(&global, &Config::default()).unwrap();
        assert_eq!(db_config.path, temp.path().join(DATABASE_FILE_NAME));
    }

    #[test]
    fn test_busy_timeout_flag_wins() {
        let global = GlobalOptions {
            data_dir: Some(PathBuf::from("/tmp/tablebook-test")),
            busy_timeout: Some(9),
            ..Default::default()
        };
        let config = Config {
            maximum_lock_wait_seconds: Some(2),
            ..Default::default()
        };
        let db_config = database_config(&global, &config).unwrap();
        assert_eq!(db_config.busy_timeout, Duration::from_secs(9));
    }
}
