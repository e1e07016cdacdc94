//! Main entry point for the tablebook CLI.
//!
//! Operator commands for the reservation store, plus `serve` for the HTTP
//! API used by the booking clerk, the servers, and the manager.

use clap::Parser;
use tablebook_cli::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();

    let _logger = tablebook::init_logger(cli.verbose, cli.quiet);

    let global = cli.global_options();

    let result = match cli.command {
        Command::Init(cmd) => cmd.execute(&global),
        Command::Serve(cmd) => cmd.execute(&global),
        Command::Create(cmd) => cmd.execute(&global),
        Command::Cancel(cmd) => cmd.execute(&global),
        Command::Confirm(cmd) => cmd.execute(&global),
        Command::Finalize(cmd) => cmd.execute(&global),
        Command::Pending(cmd) => cmd.execute(&global),
        Command::InUse(cmd) => cmd.execute(&global),
        Command::Availability(cmd) => cmd.execute(&global),
        Command::Report(cmd) => cmd.execute(&global),
        Command::ShowDataDir(cmd) => cmd.execute(&global),
        Command::ValidateConfig(cmd) => cmd.execute(&global),
        Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
