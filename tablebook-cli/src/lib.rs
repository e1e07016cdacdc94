//! Library exports for tablebook-cli.
//!
//! This module exports the CLI structure for use by the build script and
//! the integration tests, which also drive the HTTP router directly.

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;
pub mod server;
pub mod utils;

// Re-export CLI for build script
pub use cli::Cli;
