//! Main entry point for the roombook CLI.
//!
//! Without a subcommand the interactive shell starts. Subcommands cover
//! the same operations for scripts:
//! - `reserve`: Reserve a room for a day
//! - `list`: List reservations
//! - `cancel`: Cancel a reservation

use clap::Parser;
use roombook_cli::cli::{Cli, Command};
use roombook_cli::commands::ShellCommand;
use roombook_cli::utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    let logger = roombook::init_logger(cli.verbose, cli.quiet);
    if let Err(e) = logger.install() {
        eprintln!("Warning: logging unavailable: {e}");
    }

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        data_dir: cli.data_dir,
        busy_timeout: cli.busy_timeout,
        disable_autoinit: cli.disable_autoinit,
    };

    let result = match cli.command.unwrap_or(Command::Shell(ShellCommand::default())) {
        Command::Shell(cmd) => cmd.execute(&global),
        Command::Reserve(cmd) => cmd.execute(&global),
        Command::List(cmd) => cmd.execute(&global),
        Command::Cancel(cmd) => cmd.execute(&global),
        Command::Rooms(cmd) => cmd.execute(&global),
        Command::Init(cmd) => cmd.execute(&global),
        Command::ShowDataDir(cmd) => cmd.execute(&global),
        Command::Validate(cmd) => cmd.execute(&global),
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
