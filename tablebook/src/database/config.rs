//! Database configuration and connection parameters.
//!
//! This module provides configuration types for database connections,
//! including path resolution and connection parameters.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};

/// File name of the reservation store inside the data directory.
pub const DATABASE_FILE_NAME: &str = "tablebook.db";

/// Name of the data directory under the user's home.
const DEFAULT_DATA_DIR_NAME: &str = ".tablebook";

/// Configuration for database connections.
///
/// This struct contains all parameters needed to open and configure
/// a database connection, including the database file path, timeout
/// settings, and access modes.
///
/// # Examples
///
/// ```
/// use tablebook::database::DatabaseConfig;
/// use std::time::Duration;
///
/// // Create a configuration with default settings
/// let config = DatabaseConfig::new("/tmp/tablebook.db");
///
/// // Customize the configuration
/// let config = DatabaseConfig::new("/tmp/tablebook.db")
///     .with_busy_timeout(Duration::from_millis(10000));
/// ```
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Path to the database file.
    pub path: PathBuf,
    /// Busy timeout for database lock contention.
    pub busy_timeout: Duration,
    /// Whether to automatically create the database if it doesn't exist.
    pub auto_create: bool,
    /// Whether to open the database in read-only mode.
    pub read_only: bool,
}

impl DatabaseConfig {
    /// Creates a new database configuration with default settings.
    ///
    /// Default settings:
    /// - `busy_timeout`: 5000ms
    /// - `auto_create`: true
    /// - `read_only`: false
    ///
    /// # Examples
    ///
    /// ```
    /// use tablebook::database::DatabaseConfig;
    ///
    /// let config = DatabaseConfig::new("/tmp/tablebook.db");
    /// assert_eq!(config.path.to_str().unwrap(), "/tmp/tablebook.db");
    /// ```
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            busy_timeout: Duration::from_millis(5000),
            auto_create: true,
            read_only: false,
        }
    }

    /// Creates a configuration for the store inside `data_dir`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tablebook::database::DatabaseConfig;
    ///
    /// let config = DatabaseConfig::in_data_dir("/srv/restaurant");
    /// assert!(config.path.ends_with("tablebook.db"));
    /// ```
    #[must_use]
    pub fn in_data_dir(data_dir: impl AsRef<Path>) -> Self {
        Self::new(data_dir.as_ref().join(DATABASE_FILE_NAME))
    }

    /// Sets the busy timeout duration.
    ///
    /// The busy timeout determines how long the database connection will
    /// wait when encountering a locked database before returning an error.
    #[must_use]
    pub fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    /// Disables creation of a missing database file.
    #[must_use]
    pub fn without_auto_create(mut self) -> Self {
        self.auto_create = false;
        self
    }

    /// Configures the database to be opened in read-only mode.
    ///
    /// When read-only is enabled, `auto_create` is automatically disabled.
    ///
    /// # Examples
    ///
    /// ```
    /// use tablebook::database::DatabaseConfig;
    ///
    /// let config = DatabaseConfig::new("/tmp/tablebook.db").read_only();
    /// assert!(config.read_only);
    /// assert!(!config.auto_create);
    /// ```
    #[must_use]
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self.auto_create = false;
        self
    }
}

/// Returns the default data directory, `~/.tablebook`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_data_dir() -> Result<PathBuf> {
    let home = home::home_dir().ok_or_else(|| Error::InvalidPath {
        path: PathBuf::from("~"),
        reason: "cannot determine home directory".into(),
    })?;
    Ok(home.join(DEFAULT_DATA_DIR_NAME))
}

/// Resolves the database path using environment variables or defaults.
///
/// The resolution order is:
/// 1. `$TABLEBOOK_DATA_DIR/tablebook.db` if `TABLEBOOK_DATA_DIR` is set
/// 2. `~/.tablebook/tablebook.db` otherwise
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined and
/// `TABLEBOOK_DATA_DIR` is not set.
pub fn resolve_database_path() -> Result<PathBuf> {
    match std::env::var("TABLEBOOK_DATA_DIR") {
        Ok(data_dir) if !data_dir.is_empty() => {
            Ok(PathBuf::from(data_dir).join(DATABASE_FILE_NAME))
        }
        _ => Ok(default_data_dir()?.join(DATABASE_FILE_NAME)),
    }
}
