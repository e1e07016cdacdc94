//! Configuration schema definitions.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Name of the configuration file inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Address the HTTP API listens on when nothing else is configured.
pub const DEFAULT_BIND: &str = "127.0.0.1:5000";

/// Store lock wait used when nothing else is configured, in seconds.
pub const DEFAULT_LOCK_WAIT_SECONDS: u64 = 5;

/// Complete configuration structure.
///
/// Every field is optional so that partial sources can be layered; the
/// accessor methods fill in defaults.
///
/// # Examples
///
/// ```
/// use tablebook::config::{Config, OutputFormat};
///
/// let config = Config {
///     output_format: Some(OutputFormat::Json),
///     ..Default::default()
/// };
/// assert_eq!(config.bind(), "127.0.0.1:5000");
/// assert_eq!(config.output_format(), OutputFormat::Json);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Socket address for `tablebook serve`.
    pub bind: Option<String>,

    /// Maximum time to wait for the store lock (seconds).
    pub maximum_lock_wait_seconds: Option<u64>,

    /// Refuse to create a store implicitly.
    pub disable_autoinit: Option<bool>,

    /// Output format for report commands.
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// Listen address, defaulting to [`DEFAULT_BIND`].
    #[must_use]
    pub fn bind(&self) -> &str {
        self.bind.as_deref().unwrap_or(DEFAULT_BIND)
    }

    /// Store lock wait as a duration.
    #[must_use]
    pub fn lock_wait(&self) -> Duration {
        Duration::from_secs(
            self.maximum_lock_wait_seconds
                .unwrap_or(DEFAULT_LOCK_WAIT_SECONDS),
        )
    }

    /// Whether implicit store creation is disabled.
    #[must_use]
    pub fn autoinit_disabled(&self) -> bool {
        self.disable_autoinit.unwrap_or(false)
    }

    /// Report output format, defaulting to [`OutputFormat::Table`].
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }
}

/// Output format for report commands.
///
/// # Examples
///
/// ```
/// use tablebook::config::OutputFormat;
///
/// let format = OutputFormat::Json;
/// assert_eq!(format.to_string(), "json");
/// assert_eq!("TSV".parse::<OutputFormat>().unwrap(), OutputFormat::Tsv);
/// ```
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// CSV output format.
    Csv,
    /// TSV output format.
    Tsv,
    /// Human-readable table format.
    #[default]
    Table,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Tsv => write!(f, "tsv"),
            Self::Table => write!(f, "table"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "tsv" => Ok(Self::Tsv),
            "table" => Ok(Self::Table),
            _ => Err(format!(
                "invalid output format: '{s}' (expected json, csv, tsv or table)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let yaml = r"
bind: 0.0.0.0:8080
maximum_lock_wait_seconds: 10
disable_autoinit: true
output_format: csv
";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.bind(), "0.0.0.0:8080");
        assert_eq!(config.lock_wait(), Duration::from_secs(10));
        assert!(config.autoinit_disabled());
        assert_eq!(config.output_format(), OutputFormat::Csv);
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.bind(), DEFAULT_BIND);
        assert_eq!(config.lock_wait(), Duration::from_secs(5));
        assert!(!config.autoinit_disabled());
        assert_eq!(config.output_format(), OutputFormat::Table);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: Result<Config, _> = serde_yaml::from_str("ports:\n  min: 5000\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("Table".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
        assert!("xml".parse::<OutputFormat>().is_err());
    }
}
