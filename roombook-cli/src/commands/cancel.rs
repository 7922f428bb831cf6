//! Cancel command implementation.
//!
//! This module implements the `cancel` command, which removes the
//! reservation for one room on one day after confirmation.

use crate::commands::shell::Prompter;
use crate::error::CliError;
use crate::utils::{load_configuration, open_service, GlobalOptions};
use clap::Args;
use roombook::{Confirmation, RoomId};
use std::io;

/// Cancel a reservation.
#[derive(Args)]
pub struct CancelCommand {
    /// Day of the reservation, as YYYYMMDD
    #[arg(long, value_name = "YYYYMMDD")]
    pub date: String,

    /// Room id
    #[arg(long, value_name = "ID")]
    pub room: u32,

    /// Cancel without asking for confirmation
    #[arg(long, short = 'y')]
    pub yes: bool,
}

impl CancelCommand {
    /// Execute the cancel command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut service = open_service(global, &config)?;
        let room = RoomId::new(self.room);

        let details = service
            .lookup_reservation(&self.date, room)
            .map_err(CliError::from)?;

        let confirm = if self.yes {
            Confirmation::Yes
        } else {
            let stdin = io::stdin();
            let mut prompter = Prompter::new(stdin.lock(), io::stderr());
            prompter
                .confirm(&format!("Cancel {details}?"))?
                .ok_or_else(|| CliError::InvalidArguments("no confirmation given".into()))?
        };

        let outcome = service
            .cancel_reservation(&self.date, room, confirm)
            .map_err(CliError::from)?;

        println!("{outcome}");
        Ok(())
    }
}
