//! Configuration validation.

use std::net::SocketAddr;

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Longest accepted lock wait, one hour.
pub const MAX_LOCK_WAIT_SECONDS: u64 = 3600;

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use tablebook::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
///
/// let bad = Config { bind: Some("not an address".into()), ..Default::default() };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first invalid field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref bind) = config.bind {
            Self::validate_bind(bind)?;
        }

        if let Some(timeout) = config.maximum_lock_wait_seconds {
            if timeout == 0 {
                return Err(Error::Validation {
                    field: "maximum_lock_wait_seconds".into(),
                    message: "Timeout must be greater than 0".into(),
                });
            }
            if timeout > MAX_LOCK_WAIT_SECONDS {
                return Err(Error::Validation {
                    field: "maximum_lock_wait_seconds".into(),
                    message: format!("Timeout must not exceed {MAX_LOCK_WAIT_SECONDS} seconds"),
                });
            }
        }

        Ok(())
    }

    fn validate_bind(bind: &str) -> Result<()> {
        bind.parse::<SocketAddr>()
            .map(|_| ())
            .map_err(|e| Error::Validation {
                field: "bind".into(),
                message: format!("'{bind}' is not a socket address: {e}"),
            })
    }
}
