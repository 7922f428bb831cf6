//! Rooms and the room registry.
//!
//! Rooms are a small, rarely changing set of bookable units, each with a
//! numeric id and a display name. The registry is read from storage at the
//! start of every operation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Identifier of a bookable room.
///
/// # Examples
///
/// ```
/// use roombook::RoomId;
///
/// let id: RoomId = " 2 ".parse().unwrap();
/// assert_eq!(id.value(), 2);
/// assert!("two".parse::<RoomId>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(u32);

impl RoomId {
    /// Creates a room id.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the numeric id.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl From<u32> for RoomId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl FromStr for RoomId {
    type Err = Error;

    /// Parses an operator's room selection. Surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<u32>()
            .map(Self)
            .map_err(|_| Error::InvalidRoomSelection {
                input: s.to_string(),
            })
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A bookable room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// The room identifier.
    pub id: RoomId,
    /// Human-readable display name.
    pub name: String,
}

impl Room {
    /// Creates a room.
    ///
    /// # Examples
    ///
    /// ```
    /// use roombook::{Room, RoomId};
    ///
    /// let room = Room::new(RoomId::new(0), "Fuji");
    /// assert_eq!(room.to_string(), "0: Fuji");
    /// ```
    #[must_use]
    pub fn new(id: RoomId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.id, self.name)
    }
}

/// The ordered set of registered rooms.
///
/// # Examples
///
/// ```
/// use roombook::{Room, RoomId, RoomRegistry};
///
/// let registry = RoomRegistry::new(vec![
///     Room::new(RoomId::new(1), "Sakura"),
///     Room::new(RoomId::new(0), "Fuji"),
/// ]);
///
/// let names: Vec<_> = registry.iter().map(|r| r.name.as_str()).collect();
/// assert_eq!(names, ["Fuji", "Sakura"]);
/// assert!(registry.contains(RoomId::new(1)));
/// assert!(registry.get(RoomId::new(5)).is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomRegistry {
    rooms: Vec<Room>,
}

impl RoomRegistry {
    /// Creates a registry ordered by room id.
    #[must_use]
    pub fn new(mut rooms: Vec<Room>) -> Self {
        rooms.sort_by_key(|room| room.id);
        Self { rooms }
    }

    /// The rooms configured when nothing else is specified.
    #[must_use]
    pub fn defaults() -> Self {
        Self::new(vec![
            Room::new(RoomId::new(0), "Fuji"),
            Room::new(RoomId::new(1), "Sakura"),
            Room::new(RoomId::new(2), "Tsubaki"),
        ])
    }

    /// Looks up a room by id.
    #[must_use]
    pub fn get(&self, id: RoomId) -> Option<&Room> {
        self.rooms.iter().find(|room| room.id == id)
    }

    /// Looks up a registered room.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownRoom`] if `id` is not registered.
    pub fn require(&self, id: RoomId) -> Result<&Room> {
        self.get(id).ok_or(Error::UnknownRoom { room: id })
    }

    /// Returns true if `id` is registered.
    #[must_use]
    pub fn contains(&self, id: RoomId) -> bool {
        self.get(id).is_some()
    }

    /// Iterates rooms in id order.
    pub fn iter(&self) -> std::slice::Iter<'_, Room> {
        self.rooms.iter()
    }

    /// Returns the number of registered rooms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Returns true if no rooms are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Fails if the registry is empty.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoRoomsConfigured`] if no rooms are registered.
    pub fn require_non_empty(&self) -> Result<&Self> {
        if self.is_empty() {
            return Err(Error::NoRoomsConfigured);
        }
        Ok(self)
    }

    /// Display name for `id`, or a placeholder for rooms no longer registered.
    #[must_use]
    pub fn display_name(&self, id: RoomId) -> String {
        self.get(id)
            .map_or_else(|| format!("unknown room {id}"), |room| room.name.clone())
    }

    /// Renders the choices line shown to an operator, e.g. `0: Fuji, 1: Sakura`.
    #[must_use]
    pub fn choices(&self) -> String {
        self.rooms
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl<'a> IntoIterator for &'a RoomRegistry {
    type Item = &'a Room;
    type IntoIter = std::slice::Iter<'a, Room>;

    fn into_iter(self) -> Self::IntoIter {
        self.rooms.iter()
    }
}
