//! Reservation types.
//!
//! A reservation binds a calendar date and a room to a holder's name. At
//! most one live reservation may exist for any (date, room) pair; records
//! are never edited in place, only created and cancelled.

use std::fmt;
use std::time::SystemTime;

use serde::{Serialize, Serializer};

use crate::date::ReservationDate;
use crate::error::{Error, Result};
use crate::room::{Room, RoomId};

/// Maximum length of a holder name, in characters.
pub const MAX_HOLDER_NAME_CHARS: usize = 100;

/// Store-assigned reservation identifier.
///
/// Identifiers increase monotonically and are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ReservationId(i64);

impl ReservationId {
    /// Wraps a raw identifier.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ReservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The name a reservation is held under.
///
/// # Examples
///
/// ```
/// use roombook::HolderName;
///
/// let name = HolderName::new("  Tanaka ").unwrap();
/// assert_eq!(name.as_str(), "Tanaka");
///
/// assert!(HolderName::new("").is_err());
/// assert!(HolderName::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HolderName(String);

impl HolderName {
    /// Validates and normalizes a holder name.
    ///
    /// Leading and trailing whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidName`] if the name is empty after trimming,
    /// longer than [`MAX_HOLDER_NAME_CHARS`] characters, or contains control
    /// characters.
    pub fn new(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(Error::InvalidName {
                reason: "name must not be empty".into(),
            });
        }

        if trimmed.chars().count() > MAX_HOLDER_NAME_CHARS {
            return Err(Error::InvalidName {
                reason: format!("name must be at most {MAX_HOLDER_NAME_CHARS} characters"),
            });
        }

        if trimmed.chars().any(char::is_control) {
            return Err(Error::InvalidName {
                reason: "name must not contain control characters".into(),
            });
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HolderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for HolderName {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

/// A validated reservation that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReservation {
    /// The reserved date.
    pub date: ReservationDate,
    /// The reserved room.
    pub room: RoomId,
    /// The holder's name.
    pub holder: HolderName,
}

impl NewReservation {
    /// Creates a new reservation request.
    #[must_use]
    pub const fn new(date: ReservationDate, room: RoomId, holder: HolderName) -> Self {
        Self { date, room, holder }
    }
}

/// A stored reservation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    id: ReservationId,
    date: ReservationDate,
    room: RoomId,
    holder: HolderName,
    created_at: SystemTime,
}

impl Reservation {
    /// Assembles a stored reservation from its parts.
    #[must_use]
    pub fn from_parts(id: ReservationId, new: NewReservation, created_at: SystemTime) -> Self {
        Self {
            id,
            date: new.date,
            room: new.room,
            holder: new.holder,
            created_at,
        }
    }

    /// Returns the store-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> ReservationId {
        self.id
    }

    /// Returns the reserved date.
    #[must_use]
    pub const fn date(&self) -> ReservationDate {
        self.date
    }

    /// Returns the reserved room.
    #[must_use]
    pub const fn room(&self) -> RoomId {
        self.room
    }

    /// Returns the holder's name.
    #[must_use]
    pub const fn holder(&self) -> &HolderName {
        &self.holder
    }

    /// Returns when the reservation was recorded.
    #[must_use]
    pub const fn created_at(&self) -> SystemTime {
        self.created_at
    }

    /// Joins the reservation with its room for display.
    #[must_use]
    pub fn with_room(self, room: Room) -> ReservationDetails {
        ReservationDetails {
            id: self.id,
            date: self.date,
            room,
            holder: self.holder,
        }
    }
}

/// A reservation joined with its room's display name.
///
/// # Examples
///
/// ```
/// use roombook::{HolderName, ReservationDate, ReservationDetails, ReservationId, Room, RoomId};
///
/// let details = ReservationDetails {
///     id: ReservationId::new(1),
///     date: ReservationDate::parse("20301001").unwrap(),
///     room: Room::new(RoomId::new(0), "Fuji"),
///     holder: HolderName::new("Tanaka").unwrap(),
/// };
/// assert_eq!(details.to_string(), "2030-10-01 - Fuji - Tanaka");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReservationDetails {
    /// The store-assigned identifier.
    pub id: ReservationId,
    /// The reserved date.
    pub date: ReservationDate,
    /// The reserved room.
    pub room: Room,
    /// The holder's name.
    pub holder: HolderName,
}

impl fmt::Display for ReservationDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} - {}", self.date, self.room.name, self.holder)
    }
}
