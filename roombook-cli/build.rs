//! Build script for roombook-cli.
//!
//! Generates a man page at build time using clap_mangen. The generated man
//! page is placed in OUT_DIR for inclusion in release builds.
//!
//! Build scripts cannot depend on the crate being built, so the command
//! structure is declared here again.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep this structure synchronized with src/cli.rs.
fn build_cli() -> Command {
    Command::new("roombook")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Book rooms by the day")
        .long_about(
            "Reserve, list and cancel whole-day room bookings. \
             Without a subcommand an interactive menu starts.",
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
                .env("ROOMBOOK_DATA_DIR"),
        )
        .arg(
            Arg::new("busy-timeout")
                .long("busy-timeout")
                .help("Override the database busy timeout (in seconds)")
                .value_name("SECONDS")
                .global(true)
                .env("ROOMBOOK_BUSY_TIMEOUT"),
        )
        .arg(
            Arg::new("disable-autoinit")
                .long("disable-autoinit")
                .help("Disable automatic database initialization")
                .global(true)
                .action(clap::ArgAction::SetTrue)
                .env("ROOMBOOK_DISABLE_AUTOINIT"),
        )
        .subcommands(vec![
            Command::new("shell")
                .about("Interactive menu for booking, listing and cancelling")
                .long_about("Start the menu: 1 new reservation, 2 list, 3 cancel, 4 exit"),
            Command::new("reserve")
                .about("Reserve a room for a day")
                .long_about("Book a room on a YYYYMMDD date for a named holder"),
            Command::new("list")
                .about("List reservations")
                .long_about("Display all reservations in date order in various formats"),
            Command::new("cancel")
                .about("Cancel a reservation")
                .long_about("Remove the reservation for a room on a date after confirmation"),
            Command::new("rooms")
                .about("List the bookable rooms")
                .long_about("Display the registered rooms and their ids"),
            Command::new("init")
                .about("Initialize the data directory and database")
                .long_about("Set up the roombook database and configuration"),
            Command::new("show-data-dir")
                .about("Show the resolved data directory path")
                .long_about("Display the path to the roombook data directory"),
            Command::new("validate")
                .about("Validate a configuration file")
                .long_about("Check a roombook configuration file for errors"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("roombook.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
