//! Reserve command implementation.
//!
//! This module implements the `reserve` command, which books one room for
//! one day.

use crate::error::CliError;
use crate::utils::{load_configuration, open_service, GlobalOptions};
use clap::Args;
use roombook::RoomId;

/// Reserve a room for a day.
#[derive(Args)]
pub struct ReserveCommand {
    /// Day to book, as YYYYMMDD
    #[arg(long, value_name = "YYYYMMDD")]
    pub date: String,

    /// Room id (see `roombook rooms`)
    #[arg(long, value_name = "ID")]
    pub room: u32,

    /// Name of the person holding the reservation
    #[arg(long, value_name = "NAME")]
    pub name: String,

    /// Perform a dry run
    #[arg(long)]
    pub dry_run: bool,
}

impl ReserveCommand {
    /// Execute the reserve command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut service = open_service(global, &config)?;
        let room = RoomId::new(self.room);

        if self.dry_run {
            let result = service
                .preview_reservation(&self.date, room, &self.name)
                .map_err(CliError::from)?;

            if !global.quiet {
                eprintln!("Dry run - would perform the following actions:");
                for (i, action) in result.actions_taken.iter().enumerate() {
                    eprintln!("  {}. {action}", i + 1);
                }
                if !result.warnings.is_empty() {
                    eprintln!("Warnings:");
                    for warning in &result.warnings {
                        eprintln!("  - {warning}");
                    }
                }
            }
            return Ok(());
        }

        let details = service
            .make_reservation(&self.date, room, &self.name)
            .map_err(CliError::from)?;

        // The booked reservation goes to stdout, one line
        println!("{details}");
        Ok(())
    }
}
