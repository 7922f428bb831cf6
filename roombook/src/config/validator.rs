//! Configuration validation.

use std::collections::HashSet;

use crate::config::schema::{Config, RoomConfig};
use crate::error::{Error, Result};

/// Longest accepted room name, in characters.
const MAX_ROOM_NAME_CHARS: usize = 64;

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use roombook::config::{Config, ConfigValidator};
///
/// assert!(ConfigValidator::validate(&Config::default()).is_ok());
///
/// let empty = Config { rooms: Some(vec![]), ..Default::default() };
/// assert!(ConfigValidator::validate(&empty).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoRoomsConfigured`] for an explicitly empty room
    /// list, and [`Error::Validation`] for any other invalid value.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref rooms) = config.rooms {
            Self::validate_rooms(rooms)?;
        }

        if let Some(timeout) = config.maximum_lock_wait_seconds {
            if timeout == 0 {
                return Err(Error::Validation {
                    field: "maximum_lock_wait_seconds".into(),
                    message: "Timeout must be greater than 0".into(),
                });
            }
        }

        Ok(())
    }

    /// Validate the room list: non-empty, unique ids, unique non-blank names.
    fn validate_rooms(rooms: &[RoomConfig]) -> Result<()> {
        if rooms.is_empty() {
            return Err(Error::NoRoomsConfigured);
        }

        let mut ids = HashSet::new();
        let mut names = HashSet::new();

        for room in rooms {
            let field = format!("rooms[{}].name", room.id);
            let name = room.name.trim();

            if name.is_empty() {
                return Err(Error::Validation {
                    field,
                    message: "Cannot be empty or only whitespace".into(),
                });
            }

            if name.contains('\0') {
                return Err(Error::Validation {
                    field,
                    message: "Cannot contain null bytes".into(),
                });
            }

            if name.chars().count() > MAX_ROOM_NAME_CHARS {
                return Err(Error::Validation {
                    field,
                    message: format!("Cannot exceed {MAX_ROOM_NAME_CHARS} characters"),
                });
            }

            if !ids.insert(room.id) {
                return Err(Error::Validation {
                    field: "rooms".into(),
                    message: format!("Duplicate room id {}", room.id),
                });
            }

            if !names.insert(name.to_lowercase()) {
                return Err(Error::Validation {
                    field: "rooms".into(),
                    message: format!("Duplicate room name '{name}'"),
                });
            }
        }

        Ok(())
    }
}
