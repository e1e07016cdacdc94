//! Cancel command implementation.

use crate::error::CliError;
use crate::output::print_outcome;
use crate::utils::{load_configuration, open_database, GlobalOptions};
use clap::Args;
use tablebook::Lifecycle;

/// Cancel a booked reservation.
#[derive(Args)]
pub struct CancelCommand {
    /// Reservation id
    #[arg(value_name = "ID")]
    pub id: i64,

    /// Perform a dry run
    #[arg(long)]
    pub dry_run: bool,
}

impl CancelCommand {
    /// Execute the cancel command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let outcome = Lifecycle::new(&mut db)
            .with_dry_run(self.dry_run)
            .cancel(self.id)?;

        print_outcome(global, &outcome, &format!("Reservation {} cancelled", self.id));
        Ok(())
    }
}
