//! Configuration schema definitions.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::room::{Room, RoomId, RoomRegistry};

/// Name of the configuration file inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Lock wait used when none is configured.
pub const DEFAULT_LOCK_WAIT_SECONDS: u64 = 5;

/// Complete configuration structure.
///
/// Every field is optional so that sources can be layered; accessors
/// supply the built-in defaults.
///
/// # Examples
///
/// ```
/// use roombook::config::{Config, RoomConfig};
///
/// let config = Config {
///     rooms: Some(vec![RoomConfig { id: 7, name: "Kiku".into() }]),
///     ..Default::default()
/// };
/// assert_eq!(config.room_registry().display_name(roombook::RoomId::new(7)), "Kiku");
/// assert_eq!(config.lock_wait().as_secs(), 5);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Bookable rooms.
    pub rooms: Option<Vec<RoomConfig>>,

    /// Maximum time to wait for the database write lock (seconds).
    pub maximum_lock_wait_seconds: Option<u64>,

    /// Output format for list commands.
    pub output_format: Option<OutputFormat>,

    /// Disable automatic creation of the data directory.
    pub disable_autoinit: Option<bool>,
}

impl Config {
    /// Returns the configured rooms, or the default rooms if none are set.
    #[must_use]
    pub fn room_registry(&self) -> RoomRegistry {
        self.rooms.as_ref().map_or_else(RoomRegistry::defaults, |rooms| {
            RoomRegistry::new(rooms.iter().map(Room::from).collect())
        })
    }

    /// Returns the lock wait as a duration.
    #[must_use]
    pub fn lock_wait(&self) -> Duration {
        Duration::from_secs(
            self.maximum_lock_wait_seconds
                .unwrap_or(DEFAULT_LOCK_WAIT_SECONDS),
        )
    }

    /// Returns the configured output format, defaulting to a table.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }

    /// Returns true if automatic data directory creation is disabled.
    #[must_use]
    pub fn autoinit_disabled(&self) -> bool {
        self.disable_autoinit.unwrap_or(false)
    }
}

/// A room entry in the configuration file.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RoomConfig {
    /// Room identifier.
    pub id: u32,
    /// Display name.
    pub name: String,
}

impl From<&RoomConfig> for Room {
    fn from(config: &RoomConfig) -> Self {
        Self::new(RoomId::new(config.id), config.name.trim())
    }
}

/// Output format for list commands.
///
/// # Examples
///
/// ```
/// use roombook::config::OutputFormat;
///
/// let format = OutputFormat::Json;
/// assert_eq!(format.to_string(), "json");
/// ```
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON output format.
    Json,
    /// CSV output format.
    Csv,
    /// TSV output format.
    Tsv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Tsv => write!(f, "tsv"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "tsv" => Ok(Self::Tsv),
            other => Err(format!(
                "unknown output format '{other}' (expected table, json, csv or tsv)"
            )),
        }
    }
}
