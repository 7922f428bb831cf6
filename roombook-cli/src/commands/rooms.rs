//! Command to list the bookable rooms.

use crate::error::CliError;
use crate::utils::{load_configuration, open_service, GlobalOptions};
use clap::Args;

/// List the bookable rooms.
#[derive(Args)]
pub struct RoomsCommand {}

impl RoomsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let service = open_service(global, &config)?;

        for room in &service.rooms()? {
            println!("{room}");
        }
        Ok(())
    }
}
