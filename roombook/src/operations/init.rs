//! Data directory initialization.
//!
//! Creates the data directory, the reservation database with its rooms,
//! and optionally a commented configuration file.

use std::fs;
use std::path::PathBuf;

use crate::config::CONFIG_FILE_NAME;
use crate::database::DATABASE_FILE_NAME;
use crate::error::{Error, Result};
use crate::room::RoomRegistry;
use crate::{Database, DatabaseConfig};

/// Options for data directory initialization.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Data directory to initialize.
    pub data_dir: PathBuf,
    /// Replace an existing database.
    pub overwrite: bool,
    /// Write a default configuration file.
    pub create_config: bool,
    /// Rooms to register in the new database.
    pub rooms: RoomRegistry,
}

impl InitOptions {
    /// Creates initialization options registering the default rooms.
    #[must_use]
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            overwrite: false,
            create_config: false,
            rooms: RoomRegistry::defaults(),
        }
    }

    /// Sets whether to overwrite an existing database.
    #[must_use]
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Sets whether to create the default configuration file.
    #[must_use]
    pub fn with_create_config(mut self, create_config: bool) -> Self {
        self.create_config = create_config;
        self
    }

    /// Sets the rooms to register.
    #[must_use]
    pub fn with_rooms(mut self, rooms: RoomRegistry) -> Self {
        self.rooms = rooms;
        self
    }
}

/// Result of initialization.
#[derive(Debug)]
pub struct InitResult {
    /// Whether the data directory was created.
    pub data_dir_created: bool,
    /// Whether the database was created or recreated.
    pub database_created: bool,
    /// Whether a configuration file was created.
    pub config_created: bool,
    /// Number of rooms registered.
    pub rooms_registered: usize,
    /// Path to the data directory.
    pub data_dir: PathBuf,
}

/// Default configuration template.
const DEFAULT_CONFIG_TEMPLATE: &str = r"# roombook configuration

# Bookable rooms. Ids are permanent once a room has been registered.
rooms:
  - id: 0
    name: Fuji
  - id: 1
    name: Sakura
  - id: 2
    name: Tsubaki

# Maximum lock wait time in seconds (default: 5)
# maximum_lock_wait_seconds: 5

# Output format for `list`: table, json, csv or tsv (default: table)
# output_format: table
";

/// Initializes the data directory and database.
///
/// # Errors
///
/// Returns an error if the directory or database cannot be created, the
/// configuration file cannot be written, or the database already exists and
/// `overwrite` is false.
///
/// # Examples
///
/// ```no_run
/// use roombook::operations::{init_database, InitOptions};
/// use std::path::PathBuf;
///
/// let options = InitOptions::new(PathBuf::from("/tmp/roombook-data")).with_create_config(true);
/// let result = init_database(&options).unwrap();
/// println!("registered {} rooms", result.rooms_registered);
/// ```
pub fn init_database(options: &InitOptions) -> Result<InitResult> {
    let rooms = options.rooms.require_non_empty()?;

    let mut result = InitResult {
        data_dir_created: false,
        database_created: false,
        config_created: false,
        rooms_registered: 0,
        data_dir: options.data_dir.clone(),
    };

    if !options.data_dir.exists() {
        fs::create_dir_all(&options.data_dir)?;
        result.data_dir_created = true;
    }

    let db_path = options.data_dir.join(DATABASE_FILE_NAME);
    let db_exists = db_path.exists();

    if db_exists && !options.overwrite {
        return Err(Error::Validation {
            field: "database".into(),
            message: format!(
                "Database already exists at {}. Use --overwrite to replace it.",
                db_path.display()
            ),
        });
    }

    if db_exists {
        fs::remove_file(&db_path)?;
        for suffix in ["-wal", "-shm"] {
            let sidecar = options.data_dir.join(format!("{DATABASE_FILE_NAME}{suffix}"));
            if sidecar.exists() {
                fs::remove_file(sidecar)?;
            }
        }
    }

    let mut db = Database::open(DatabaseConfig::new(&db_path))?;
    result.database_created = true;

    let tx = db.begin_transaction()?;
    result.rooms_registered = Database::register_rooms(&tx, rooms)?;
    tx.commit()?;

    if options.create_config {
        let config_path = options.data_dir.join(CONFIG_FILE_NAME);
        if !config_path.exists() {
            fs::write(&config_path, DEFAULT_CONFIG_TEMPLATE)?;
            result.config_created = true;
        }
    }

    log::info!("initialized data directory {}", options.data_dir.display());
    Ok(result)
}
