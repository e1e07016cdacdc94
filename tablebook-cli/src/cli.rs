//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    AvailabilityCommand, CancelCommand, CompletionsCommand, ConfirmCommand, CreateCommand,
    FinalizeCommand, InUseCommand, InitCommand, PendingCommand, ReportCommand, ServeCommand,
    ShowDataDirCommand, ValidateConfigCommand,
};
use crate::utils::GlobalOptions;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for managing restaurant table reservations.
#[derive(Parser)]
#[command(name = "tablebook")]
#[command(version, about = "Manage restaurant table reservations", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "TABLEBOOK_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the store lock wait (in seconds)
    #[arg(long, value_name = "SECONDS", global = true, env = "TABLEBOOK_BUSY_TIMEOUT")]
    pub busy_timeout: Option<u32>,

    /// Disable automatic store initialization
    #[arg(long, global = true, env = "TABLEBOOK_DISABLE_AUTOINIT")]
    pub disable_autoinit: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Options shared by every command.
    pub fn global_options(&self) -> GlobalOptions {
        GlobalOptions {
            verbose: self.verbose,
            quiet: self.quiet,
            data_dir: self.data_dir.clone(),
            busy_timeout: self.busy_timeout,
            disable_autoinit: self.disable_autoinit,
        }
    }
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Initialize the data directory and reservation store
    Init(InitCommand),

    /// Serve the HTTP API
    Serve(ServeCommand),

    /// Book a table
    Create(CreateCommand),

    /// Cancel a booked reservation
    Cancel(CancelCommand),

    /// Confirm a booked reservation as a server
    Confirm(ConfirmCommand),

    /// Finalize a confirmed reservation
    Finalize(FinalizeCommand),

    /// List reservations waiting for a server
    Pending(PendingCommand),

    /// List tables occupied right now
    InUse(InUseCommand),

    /// Show the occupied slots of a table on a date
    Availability(AvailabilityCommand),

    /// Manager reports by period, table, or server
    Report(ReportCommand),

    /// Show the resolved data directory path
    ShowDataDir(ShowDataDirCommand),

    /// Validate a configuration file
    ValidateConfig(ValidateConfigCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
