//! Configuration system for tablebook.
//!
//! This module provides layered configuration with support for:
//! - a YAML configuration file in the data directory
//! - environment variable overrides
//! - programmatic overrides via the builder
//!
//! # Configuration Precedence
//!
//! Highest to lowest:
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`TABLEBOOK_*`)
//! 3. `{data_dir}/config.yaml`
//! 4. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use tablebook::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_data_dir(Path::new("/var/lib/tablebook"))
//!     .build()
//!     .unwrap();
//!
//! println!("listening on {}", config.bind());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(test)]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, OutputFormat, CONFIG_FILE_NAME, DEFAULT_BIND, DEFAULT_LOCK_WAIT_SECONDS};
pub use validator::ConfigValidator;
