//! Confirm command implementation.
//!
//! A server takes a booked reservation, claiming the table for its slot.

use crate::error::CliError;
use crate::output::print_outcome;
use crate::utils::{load_configuration, open_database, GlobalOptions};
use clap::Args;
use tablebook::{ConfirmOptions, Lifecycle};

/// Confirm a booked reservation.
#[derive(Args)]
pub struct ConfirmCommand {
    /// Reservation id
    #[arg(value_name = "ID")]
    pub id: i64,

    /// Name of the confirming server
    #[arg(long, value_name = "NAME")]
    pub server: String,

    /// Perform a dry run
    #[arg(long)]
    pub dry_run: bool,
}

impl ConfirmCommand {
    /// Execute the confirm command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let outcome = Lifecycle::new(&mut db)
            .with_dry_run(self.dry_run)
            .confirm(ConfirmOptions::new(self.id, self.server))?;

        print_outcome(
            global,
            &outcome,
            &format!("Reservation {} confirmed for {}", self.id, outcome.time_range),
        );
        Ok(())
    }
}
