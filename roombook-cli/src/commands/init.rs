//! Init command implementation.
//!
//! This module implements the `init` command for explicitly initializing
//! the roombook data directory and database.

use crate::error::CliError;
use crate::utils::{load_configuration, resolve_data_dir, GlobalOptions};
use clap::Parser;
use roombook::config::CONFIG_FILE_NAME;
use roombook::database::DATABASE_FILE_NAME;
use roombook::operations::{init_database, InitOptions};

/// Initialize the roombook data directory and database.
#[derive(Parser)]
#[command(about = "Initialize the roombook data directory and database")]
pub struct InitCommand {
    /// Overwrite existing database
    #[arg(long)]
    overwrite: bool,

    /// Create default configuration file
    #[arg(long)]
    with_config: bool,

    /// Preview actions without executing
    #[arg(long)]
    dry_run: bool,
}

impl InitCommand {
    /// Execute the init command.
    ///
    /// `--disable-autoinit` is ignored here; this command is the explicit
    /// way to create the store. `--data-dir` names the directory to create.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let data_dir = resolve_data_dir(global)?;

        if self.dry_run {
            println!("Dry-run mode: no changes will be made");
            println!();
            println!("Would initialize roombook in: {}", data_dir.display());

            if data_dir.exists() {
                println!("  - Data directory already exists: {}", data_dir.display());
            } else {
                println!("  - Create data directory: {}", data_dir.display());
            }

            let db_path = data_dir.join(DATABASE_FILE_NAME);
            if !db_path.exists() {
                println!("  - Create database: {}", db_path.display());
            } else if self.overwrite {
                println!("  - Remove existing database: {}", db_path.display());
                println!("  - Create new database: {}", db_path.display());
            } else {
                println!(
                    "  - ERROR: Database already exists (use --overwrite to replace): {}",
                    db_path.display()
                );
            }

            if self.with_config {
                let config_path = data_dir.join(CONFIG_FILE_NAME);
                if config_path.exists() {
                    println!(
                        "  - Configuration file already exists (will not overwrite): {}",
                        config_path.display()
                    );
                } else {
                    println!("  - Create configuration file: {}", config_path.display());
                }
            }

            return Ok(());
        }

        // Rooms come from the target directory's config, or the defaults
        let config = load_configuration(global)?;

        let options = InitOptions::new(data_dir)
            .with_overwrite(self.overwrite)
            .with_create_config(self.with_config)
            .with_rooms(config.room_registry());

        let result = init_database(&options).map_err(CliError::from)?;

        println!("Initialized roombook in: {}", result.data_dir.display());

        if result.data_dir_created {
            println!("  - Created data directory");
        }

        if result.database_created {
            if self.overwrite {
                println!("  - Recreated database");
            } else {
                println!("  - Created database");
            }
        }

        println!("  - Registered {} room(s)", result.rooms_registered);

        if result.config_created {
            println!("  - Created default configuration file");
        } else if self.with_config {
            println!("  - Configuration file already exists (not overwritten)");
        }

        Ok(())
    }
}
