//! Serve command implementation.
//!
//! Runs the HTTP API on a tokio runtime until Ctrl-C.

use crate::error::CliError;
use crate::server::{self, AppState};
use crate::utils::{database_config, load_configuration, shorten_path, GlobalOptions};
use clap::Args;
use std::net::SocketAddr;
use tablebook::Database;

/// Serve the HTTP API.
#[derive(Args)]
pub struct ServeCommand {
    /// Address to listen on (overrides the `bind` setting)
    #[arg(long, value_name = "ADDR")]
    pub bind: Option<SocketAddr>,
}

impl ServeCommand {
    /// Execute the serve command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db_config = database_config(global, &config)?;

        // Fail before binding if the store is unusable
        drop(Database::open(db_config.clone())?);

        let addr = match self.bind {
            Some(addr) => addr,
            None => config.bind().parse().map_err(|e| {
                CliError::Config(format!("invalid bind address '{}': {e}", config.bind()))
            })?,
        };

        if !global.quiet {
            eprintln!(
                "Serving reservations from {} on http://{addr}",
                shorten_path(&db_config.path)
            );
        }

        let runtime = tokio::runtime::Runtime::new()?;
        runtime.block_on(server::serve(addr, AppState::new(db_config)))?;
        Ok(())
    }
}
