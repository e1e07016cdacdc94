//! Create command implementation.
//!
//! Books a table. The new reservation id is printed on stdout so scripts
//! can capture it.

use crate::error::CliError;
use crate::output::print_outcome;
use crate::utils::{load_configuration, open_database, parse_date_arg, GlobalOptions};
use chrono::NaiveDate;
use clap::Args;
use tablebook::timeslot::format_date;
use tablebook::{CreateOptions, Lifecycle};

/// Book a table for a one-hour slot.
#[derive(Args)]
pub struct CreateCommand {
    /// Date of the reservation (YYYY-MM-DD or DD-MM-YYYY)
    #[arg(long, value_name = "DATE", value_parser = parse_date_arg)]
    pub date: NaiveDate,

    /// Start time (HH:MM)
    #[arg(long, value_name = "HH:MM")]
    pub time: String,

    /// Table number (1-20)
    #[arg(long, value_name = "N")]
    pub table: i64,

    /// Number of guests
    #[arg(long, value_name = "N")]
    pub party_size: i64,

    /// Name the reservation is under
    #[arg(long, value_name = "NAME")]
    pub responsible: String,

    /// Perform a dry run
    #[arg(long)]
    pub dry_run: bool,
}

impl CreateCommand {
    /// Execute the create command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let options = CreateOptions::new(
            format_date(self.date),
            self.time,
            self.table,
            self.party_size,
            self.responsible,
        );

        let outcome = Lifecycle::new(&mut db)
            .with_dry_run(self.dry_run)
            .create(options)?;

        if let Some(id) = outcome.id {
            println!("{id}");
        }
        print_outcome(
            global,
            &outcome,
            &format!("Reservation created for {}", outcome.time_range),
        );
        Ok(())
    }
}
