//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CancelCommand, CompletionsCommand, InitCommand, ListCommand, ReserveCommand, RoomsCommand,
    ShellCommand, ShowDataDirCommand, ValidateCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for booking rooms by the day.
#[derive(Parser)]
#[command(name = "roombook")]
#[command(version, about = "Book rooms by the day", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "ROOMBOOK_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the database busy timeout (in seconds)
    #[arg(long, value_name = "SECONDS", global = true, env = "ROOMBOOK_BUSY_TIMEOUT")]
    pub busy_timeout: Option<u64>,

    /// Disable automatic database initialization
    #[arg(long, global = true, env = "ROOMBOOK_DISABLE_AUTOINIT")]
    pub disable_autoinit: bool,

    /// Command to run (default: the interactive shell)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Interactive menu for booking, listing and cancelling
    Shell(ShellCommand),

    /// Reserve a room for a day
    Reserve(ReserveCommand),

    /// List reservations
    List(ListCommand),

    /// Cancel a reservation
    Cancel(CancelCommand),

    /// List the bookable rooms
    Rooms(RoomsCommand),

    /// Initialize the data directory and database
    Init(InitCommand),

    /// Show the resolved data directory path
    ShowDataDir(ShowDataDirCommand),

    /// Validate a configuration file
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
