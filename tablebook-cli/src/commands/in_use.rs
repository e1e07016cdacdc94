//! In-use command implementation.

use crate::error::CliError;
use crate::output::print_reservations;
use crate::utils::{load_configuration, open_database, GlobalOptions};
use chrono::Local;
use clap::Args;
use tablebook::{report, OutputFormat};

/// List tables occupied right now.
#[derive(Args)]
pub struct InUseCommand {
    /// Output format (table, json, csv, tsv)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,
}

impl InUseCommand {
    /// Execute the in-use command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let now = Local::now().naive_local();
        let rows = report::in_use(db.connection(), now)?;
        print_reservations(&rows, self.format.unwrap_or(config.output_format()))
    }
}
