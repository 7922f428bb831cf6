//! Error types for the roombook library.
//!
//! This module provides the error hierarchy for every booking operation,
//! using `thiserror` for ergonomic error handling. Errors fall into two
//! families: recoverable domain errors that an interactive front end
//! reports and re-prompts on, and configuration errors that make the
//! session unusable.

use std::path::PathBuf;

use thiserror::Error;

use crate::date::ReservationDate;
use crate::room::RoomId;

/// Result type alias for operations that may fail with a roombook error.
///
/// # Examples
///
/// ```
/// use roombook::{Error, Result};
///
/// fn example_operation() -> Result<u32> {
///     Ok(2)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the roombook library.
#[derive(Debug, Error)]
pub enum Error {
    /// The date text is not an 8-digit `YYYYMMDD` calendar date.
    #[error("invalid date '{input}': expected a calendar date in YYYYMMDD format")]
    InvalidDateFormat {
        /// The rejected input.
        input: String,
    },

    /// The date lies before the current calendar day.
    #[error("date {date} is in the past: choose {today} or later")]
    PastDate {
        /// The requested date.
        date: ReservationDate,
        /// The current calendar day.
        today: ReservationDate,
    },

    /// The room selection text is not a room number.
    #[error("invalid room selection '{input}': enter a room number")]
    InvalidRoomSelection {
        /// The rejected input.
        input: String,
    },

    /// The room id is not registered.
    #[error("unknown room {room}")]
    UnknownRoom {
        /// The unregistered room id.
        room: RoomId,
    },

    /// The room is already booked on that date.
    #[error("reservation conflict: {room} is already booked on {date}")]
    ReservationConflict {
        /// The contested date.
        date: ReservationDate,
        /// Display name of the contested room.
        room: String,
    },

    /// The holder name was rejected.
    #[error("invalid holder name: {reason}")]
    InvalidName {
        /// Why the name was rejected.
        reason: String,
    },

    /// A yes/no answer could not be understood.
    #[error("invalid confirmation '{input}': answer Y or N")]
    InvalidConfirmation {
        /// The rejected input.
        input: String,
    },

    /// No reservation matches the requested date and room.
    #[error("no reservation found for {room} on {date}")]
    NotFound {
        /// The requested date.
        date: ReservationDate,
        /// Display name of the requested room.
        room: String,
    },

    /// The room registry is empty.
    #[error("no rooms configured")]
    NoRoomsConfigured,

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration or storage value failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// The data directory was not found and auto-initialization is disabled.
    #[error("data directory not found: {}", path.display())]
    DataDirectoryNotFound {
        /// The expected path to the data directory.
        path: PathBuf,
    },

    /// Database corruption was detected.
    #[error("database corruption detected: {details}")]
    DatabaseCorruption {
        /// Details about the corruption.
        details: String,
    },

    /// An unsupported schema version was encountered.
    #[error("unsupported schema version: expected {expected}, found {found}")]
    UnsupportedSchemaVersion {
        /// The expected schema version.
        expected: i32,
        /// The schema version found in the database.
        found: i32,
    },
}

impl Error {
    /// Check if the error leaves the session without a usable registry or store.
    ///
    /// Configuration errors should be reported before any menu interaction
    /// and end the session.
    ///
    /// # Examples
    ///
    /// ```
    /// use roombook::Error;
    ///
    /// assert!(Error::NoRoomsConfigured.is_configuration());
    /// assert!(!Error::InvalidName { reason: "empty".into() }.is_configuration());
    /// ```
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::NoRoomsConfigured
                | Self::Database(_)
                | Self::ConfigParse(_)
                | Self::Io(_)
                | Self::Validation { .. }
                | Self::DataDirectoryNotFound { .. }
                | Self::DatabaseCorruption { .. }
                | Self::UnsupportedSchemaVersion { .. }
        )
    }

    /// Check if the error is a domain error the operator can recover from.
    ///
    /// # Examples
    ///
    /// ```
    /// use roombook::Error;
    ///
    /// let err = Error::InvalidDateFormat { input: "2024-01-01".into() };
    /// assert!(err.is_recoverable());
    /// ```
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        !self.is_configuration()
    }

    /// Check if the error means the input should be asked for again.
    ///
    /// Conflicts and missing reservations are final outcomes of an
    /// operation; malformed or out-of-range input is not.
    #[must_use]
    pub fn is_reprompt(&self) -> bool {
        matches!(
            self,
            Self::InvalidDateFormat { .. }
                | Self::PastDate { .. }
                | Self::InvalidRoomSelection { .. }
                | Self::UnknownRoom { .. }
                | Self::InvalidName { .. }
                | Self::InvalidConfirmation { .. }
        )
    }
}
