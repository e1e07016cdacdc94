//! Pending command implementation.

use crate::error::CliError;
use crate::output::print_reservations;
use crate::utils::{load_configuration, open_database, GlobalOptions};
use clap::Args;
use tablebook::{report, OutputFormat};

/// List reservations still waiting for a server.
#[derive(Args)]
pub struct PendingCommand {
    /// Output format (table, json, csv, tsv)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,
}

impl PendingCommand {
    /// Execute the pending command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let rows = report::pending(db.connection())?;
        print_reservations(&rows, self.format.unwrap_or(config.output_format()))
    }
}
