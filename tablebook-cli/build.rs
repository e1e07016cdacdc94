//! Build script for tablebook-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("tablebook")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Manage restaurant table reservations")
        .long_about(
            "Command-line tool and HTTP server for booking, confirming, and reporting on restaurant table reservations",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Override the data directory location")
                .value_name("PATH")
                .global(true)
                .env("TABLEBOOK_DATA_DIR"),
        )
        .arg(
            Arg::new("busy-timeout")
                .long("busy-timeout")
                .help("Override the store lock wait (in seconds)")
                .value_name("SECONDS")
                .global(true)
                .env("TABLEBOOK_BUSY_TIMEOUT"),
        )
        .arg(
            Arg::new("disable-autoinit")
                .long("disable-autoinit")
                .help("Disable automatic store initialization")
                .global(true)
                .action(clap::ArgAction::SetTrue)
                .env("TABLEBOOK_DISABLE_AUTOINIT"),
        )
        .subcommands(vec![
            Command::new("init")
                .about("Initialize the data directory and reservation store")
                .long_about("Create the data directory, the store, and optionally a default config.yaml"),
            Command::new("serve")
                .about("Serve the HTTP API")
                .long_about("Run the JSON API for the booking clerk, the servers, and the manager"),
            Command::new("create")
                .about("Book a table")
                .long_about("Book a table for a one-hour slot and print the new reservation id"),
            Command::new("cancel")
                .about("Cancel a booked reservation")
                .long_about("Delete a reservation that no server has confirmed yet"),
            Command::new("confirm")
                .about("Confirm a booked reservation as a server")
                .long_about("Claim the table for the reservation's slot on behalf of a server"),
            Command::new("finalize")
                .about("Finalize a confirmed reservation")
                .long_about("Mark a confirmed reservation as finished once the party leaves"),
            Command::new("pending")
                .about("List reservations waiting for a server")
                .long_about("Display booked reservations that have not been confirmed"),
            Command::new("in-use")
                .about("List tables occupied right now")
                .long_about("Display confirmed reservations whose slot contains the current time"),
            Command::new("availability")
                .about("Show the occupied slots of a table on a date")
                .long_about("List the confirmed time ranges of one table on one date"),
            Command::new("report")
                .about("Manager reports by period, table, or server")
                .long_about("Display reservations filtered by date range, table, or confirming server"),
            Command::new("show-data-dir")
                .about("Show the resolved data directory path")
                .long_about("Display the path to the tablebook data directory"),
            Command::new("validate-config")
                .about("Validate a configuration file")
                .long_about("Check a tablebook configuration file for errors"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    // Generate main tablebook.1 man page
    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("tablebook.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
