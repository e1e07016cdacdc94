//! Availability command implementation.
//!
//! Shows which slots of a table are taken on a date. Only confirmed
//! reservations occupy a slot.

use crate::error::CliError;
use crate::output::print_availability;
use crate::utils::{load_configuration, open_database, parse_date_arg, GlobalOptions};
use chrono::NaiveDate;
use clap::Args;
use tablebook::{report, OutputFormat, TableNumber};

/// Show the occupied slots of a table on a date.
#[derive(Args)]
pub struct AvailabilityCommand {
    /// Table number (1-20)
    #[arg(value_name = "TABLE")]
    pub table: i64,

    /// Date to check (YYYY-MM-DD or DD-MM-YYYY)
    #[arg(long, value_name = "DATE", value_parser = parse_date_arg)]
    pub date: NaiveDate,

    /// Output format (table, json, csv, tsv)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,
}

impl AvailabilityCommand {
    /// Execute the availability command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let table = TableNumber::try_from(self.table)
            .map_err(|e| CliError::InvalidArguments(e.to_string()))?;

        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let availability = report::availability(db.connection(), table, self.date)?;
        print_availability(&availability, self.format.unwrap_or(config.output_format()))
    }
}
