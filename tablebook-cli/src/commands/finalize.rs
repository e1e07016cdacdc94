//! Finalize command implementation.

use crate::error::CliError;
use crate::output::print_outcome;
use crate::utils::{load_configuration, open_database, GlobalOptions};
use clap::Args;
use tablebook::Lifecycle;

/// Finalize a confirmed reservation once the party leaves.
#[derive(Args)]
pub struct FinalizeCommand {
    /// Reservation id
    #[arg(value_name = "ID")]
    pub id: i64,

    /// Perform a dry run
    #[arg(long)]
    pub dry_run: bool,
}

impl FinalizeCommand {
    /// Execute the finalize command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let outcome = Lifecycle::new(&mut db)
            .with_dry_run(self.dry_run)
            .finalize(self.id)?;

        print_outcome(global, &outcome, &format!("Reservation {} finalized", self.id));
        Ok(())
    }
}
