//! Environment variable handling for configuration overrides.
//!
//! `ROOMBOOK_*` variables override values read from the configuration file.

use std::env;

use crate::config::schema::{Config, OutputFormat, RoomConfig};
use crate::error::{Error, Result};

/// Comma-separated `id=name` pairs, e.g. `0=Fuji,1=Sakura`.
pub const ROOMS_ENV: &str = "ROOMBOOK_ROOMS";
/// Maximum lock wait in seconds.
pub const LOCK_WAIT_ENV: &str = "ROOMBOOK_MAXIMUM_LOCK_WAIT_SECONDS";
/// Output format for list commands.
pub const OUTPUT_FORMAT_ENV: &str = "ROOMBOOK_OUTPUT_FORMAT";
/// Disables automatic data directory creation.
pub const DISABLE_AUTOINIT_ENV: &str = "ROOMBOOK_DISABLE_AUTOINIT";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use roombook::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g., a malformed room list or an invalid boolean).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(rooms) = env::var(ROOMS_ENV) {
            config.rooms = Some(Self::parse_rooms(&rooms)?);
        }

        if let Ok(seconds) = env::var(LOCK_WAIT_ENV) {
            config.maximum_lock_wait_seconds =
                Some(seconds.trim().parse().map_err(|_| Error::Validation {
                    field: LOCK_WAIT_ENV.into(),
                    message: "Must be a positive integer".into(),
                })?);
        }

        if let Ok(format) = env::var(OUTPUT_FORMAT_ENV) {
            config.output_format =
                Some(
                    format
                        .parse::<OutputFormat>()
                        .map_err(|message| Error::Validation {
                            field: OUTPUT_FORMAT_ENV.into(),
                            message,
                        })?,
                );
        }

        if let Ok(val) = env::var(DISABLE_AUTOINIT_ENV) {
            config.disable_autoinit = Some(Self::parse_bool(DISABLE_AUTOINIT_ENV, &val)?);
        }

        Ok(())
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }

    /// Parse a room list from comma-separated `id=name` pairs.
    fn parse_rooms(s: &str) -> Result<Vec<RoomConfig>> {
        let mut rooms = Vec::new();

        for part in s.split(',') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }

            let (id, name) = part.split_once('=').ok_or_else(|| Error::Validation {
                field: ROOMS_ENV.into(),
                message: format!("Expected id=name, got '{part}'"),
            })?;

            let id = id.trim().parse().map_err(|_| Error::Validation {
                field: ROOMS_ENV.into(),
                message: format!("Invalid room id: {id}"),
            })?;

            rooms.push(RoomConfig {
                id,
                name: name.trim().to_string(),
            });
        }

        Ok(rooms)
    }
}
