//! Report command implementation.
//!
//! Manager reports over the whole history: by date range, by table, or by
//! the server who confirmed.

use crate::error::CliError;
use crate::output::print_reservations;
use crate::utils::{load_configuration, open_database, parse_date_arg, GlobalOptions};
use chrono::NaiveDate;
use clap::{Args, Subcommand};
use tablebook::{report, OutputFormat, TableNumber};

/// Produce a manager report.
#[derive(Args)]
pub struct ReportCommand {
    /// Output format (table, json, csv, tsv)
    #[arg(long, value_name = "FORMAT", global = true)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub kind: ReportKind,
}

/// Report selection.
#[derive(Subcommand)]
pub enum ReportKind {
    /// Reservations whose date falls in an inclusive range
    Period {
        /// First date (YYYY-MM-DD or DD-MM-YYYY)
        #[arg(long, value_name = "DATE", value_parser = parse_date_arg)]
        start: NaiveDate,

        /// Last date (YYYY-MM-DD or DD-MM-YYYY)
        #[arg(long, value_name = "DATE", value_parser = parse_date_arg)]
        end: NaiveDate,
    },

    /// Every reservation of one table
    Table {
        /// Table number (1-20)
        #[arg(value_name = "TABLE")]
        table: i64,
    },

    /// Reservations confirmed by one server
    Server {
        /// Server name
        #[arg(value_name = "NAME")]
        name: String,
    },
}

impl ReportCommand {
    /// Execute the report command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let format = self.format.unwrap_or(config.output_format());

        let rows = match self.kind {
            ReportKind::Period { start, end } => {
                if start > end && !global.quiet {
                    eprintln!("Warning: start date is after end date");
                }
                let db = open_database(global, &config)?;
                report::by_period(db.connection(), start, end)?
            }
            ReportKind::Table { table } => {
                let table = TableNumber::try_from(table)
                    .map_err(|e| CliError::InvalidArguments(e.to_string()))?;
                let db = open_database(global, &config)?;
                report::by_table(db.connection(), table)?
            }
            ReportKind::Server { name } => {
                let db = open_database(global, &config)?;
                report::by_server(db.connection(), &name)?
            }
        };

        print_reservations(&rows, format)
    }
}
