//! Logging setup for tablebook.
//!
//! The library and binaries log through the `log` facade. [`init_logger`]
//! installs an `env_logger` backend writing to stderr at a level chosen from
//! CLI flags or the environment.

use std::env;
use std::fmt;

use log::LevelFilter;

/// Environment variable selecting a [`LogLevel`] by name.
pub const LOG_MODE_ENV: &str = "TABLEBOOK_LOG_MODE";

/// Environment variable holding an `env_logger` filter directive, applied on
/// top of the selected level (e.g. `tablebook=trace,tower_http=debug`).
pub const LOG_FILTER_ENV: &str = "TABLEBOOK_LOG";

/// Logging level for controlling output verbosity.
///
/// Log levels are ordered from least verbose (Quiet) to most verbose (Verbose).
///
/// # Examples
///
/// ```
/// use tablebook::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Errors only.
    Quiet,
    /// Errors, warnings, and lifecycle events.
    Normal,
    /// Everything including debug detail.
    Verbose,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quiet => write!(f, "quiet"),
            Self::Normal => write!(f, "normal"),
            Self::Verbose => write!(f, "verbose"),
        }
    }
}

impl LogLevel {
    /// Parses a log level from a string.
    ///
    /// Recognizes: "quiet", "normal", "verbose" (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use tablebook::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("quiet").unwrap(), LogLevel::Quiet);
    /// assert_eq!(LogLevel::parse("VERBOSE").unwrap(), LogLevel::Verbose);
    /// assert!(LogLevel::parse("invalid").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }

    /// The `log` filter this level enables.
    #[must_use]
    pub const fn to_filter(self) -> LevelFilter {
        match self {
            Self::Quiet => LevelFilter::Error,
            Self::Normal => LevelFilter::Info,
            Self::Verbose => LevelFilter::Debug,
        }
    }
}

/// Chooses a log level from CLI flags and the environment.
///
/// The priority order is:
/// 1. CLI flags (`verbose` wins over `quiet`)
/// 2. `TABLEBOOK_LOG_MODE`
/// 3. Normal
#[must_use]
pub fn resolve_log_level(verbose: bool, quiet: bool) -> LogLevel {
    if verbose {
        return LogLevel::Verbose;
    }
    if quiet {
        return LogLevel::Quiet;
    }

    env::var(LOG_MODE_ENV)
        .ok()
        .and_then(|value| LogLevel::parse(&value).ok())
        .unwrap_or(LogLevel::Normal)
}

/// Installs the global logger and returns the level it was set to.
///
/// Calling this more than once is harmless; later calls leave the first
/// logger in place.
///
/// # Examples
///
/// ```
/// use tablebook::{init_logger, LogLevel};
///
/// let level = init_logger(true, false);
/// assert_eq!(level, LogLevel::Verbose);
/// ```
pub fn init_logger(verbose: bool, quiet: bool) -> LogLevel {
    let level = resolve_log_level(verbose, quiet);

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level.to_filter())
        .parse_env(env_logger::Env::new().filter(LOG_FILTER_ENV))
        .format_timestamp_secs();

    if builder.try_init().is_ok() {
        log::debug!("logging initialized at {level} level");
    }

    level
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_log_level_display() {
        assert_eq!(format!("{}", LogLevel::Quiet), "quiet");
        assert_eq!(format!("{}", LogLevel::Normal), "normal");
        assert_eq!(format!("{}", LogLevel::Verbose), "verbose");
    }

    #[test]
    fn test_log_level_parse() {
        assert_eq!(LogLevel::parse("Normal").unwrap(), LogLevel::Normal);
        assert!(LogLevel::parse("").is_err());
    }

    #[test]
    fn test_level_filters() {
        assert_eq!(LogLevel::Quiet.to_filter(), LevelFilter::Error);
        assert_eq!(LogLevel::Normal.to_filter(), LevelFilter::Info);
        assert_eq!(LogLevel::Verbose.to_filter(), LevelFilter::Debug);
    }

    #[test]
    #[serial]
    fn test_resolve_flags() {
        env::remove_var(LOG_MODE_ENV);
        assert_eq!(resolve_log_level(false, false), LogLevel::Normal);
        assert_eq!(resolve_log_level(true, false), LogLevel::Verbose);
        assert_eq!(resolve_log_level(false, true), LogLevel::Quiet);
        assert_eq!(resolve_log_level(true, true), LogLevel::Verbose);
    }

    #[test]
    #[serial]
    fn test_resolve_from_env() {
        env::set_var(LOG_MODE_ENV, "verbose");
        assert_eq!(resolve_log_level(false, false), LogLevel::Verbose);

        // CLI flag overrides env
        assert_eq!(resolve_log_level(false, true), LogLevel::Quiet);

        env::set_var(LOG_MODE_ENV, "invalid");
        assert_eq!(resolve_log_level(false, false), LogLevel::Normal);

        env::remove_var(LOG_MODE_ENV);
    }

    #[test]
    #[serial]
    fn test_init_logger_twice() {
        env::remove_var(LOG_MODE_ENV);
        assert_eq!(init_logger(false, true), LogLevel::Quiet);
        assert_eq!(init_logger(false, false), LogLevel::Normal);
    }
}
