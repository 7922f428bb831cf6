//! Reserve operation planning.
//!
//! Planning validates a booking request against the current database state
//! in a fixed order: past date, room registration, availability, then the
//! holder name. The resulting plan holds a single `CreateReservation`.

use rusqlite::Connection;

use crate::database::Database;
use crate::date::ReservationDate;
use crate::error::{Error, Result};
use crate::reservation::{HolderName, NewReservation};
use crate::room::{Room, RoomId};

use super::plan::{OperationPlan, PlanAction};

/// Options for a reserve operation.
#[derive(Debug, Clone)]
pub struct ReserveOptions {
    /// The requested date.
    pub date: ReservationDate,

    /// The requested room.
    pub room: RoomId,

    /// The holder name as entered; validated during planning.
    pub name: String,
}

impl ReserveOptions {
    /// Creates reserve options.
    ///
    /// # Examples
    ///
    /// ```
    /// use roombook::operations::ReserveOptions;
    /// use roombook::{ReservationDate, RoomId};
    ///
    /// let options = ReserveOptions::new(
    ///     ReservationDate::parse("20301001").unwrap(),
    ///     RoomId::new(0),
    ///     "Tanaka",
    /// );
    /// assert_eq!(options.name, "Tanaka");
    /// ```
    #[must_use]
    pub fn new(date: ReservationDate, room: RoomId, name: impl Into<String>) -> Self {
        Self {
            date,
            room,
            name: name.into(),
        }
    }
}

/// A reservation plan generator.
pub struct ReservePlan {
    options: ReserveOptions,
    today: ReservationDate,
}

impl ReservePlan {
    /// Creates a new reserve plan evaluated against `today`.
    #[must_use]
    pub const fn new(options: ReserveOptions, today: ReservationDate) -> Self {
        Self { options, today }
    }

    /// Validates the request and returns the booking to store, with its room.
    ///
    /// This method reads the current state and does NOT modify the database.
    ///
    /// # Errors
    ///
    /// Returns, in order of checking:
    /// - [`Error::PastDate`] if the date is before today
    /// - [`Error::NoRoomsConfigured`] if no rooms are registered
    /// - [`Error::UnknownRoom`] if the room is not registered
    /// - [`Error::ReservationConflict`] if the room is already booked that day
    /// - [`Error::InvalidName`] if the holder name is rejected
    pub fn resolve(&self, conn: &Connection) -> Result<(NewReservation, Room)> {
        let ReserveOptions { date, room, name } = &self.options;

        // Step 1: Date must be today or later
        let date = date.ensure_not_past(self.today)?;

        // Step 2: Room must be registered
        let rooms = Database::list_rooms(conn)?;
        let room = rooms.require_non_empty()?.require(*room)?.clone();

        // Step 3: Room must be free that day
        if Database::reservation_exists(conn, date, room.id)? {
            return Err(Error::ReservationConflict {
                date,
                room: room.name,
            });
        }

        // Step 4: Holder name
        let holder = HolderName::new(name)?;

        Ok((NewReservation::new(date, room.id, holder), room))
    }

    /// Builds an operation plan for this reserve request.
    ///
    /// # Errors
    ///
    /// Same as [`ReservePlan::resolve`].
    pub fn build_plan(&self, conn: &Connection) -> Result<OperationPlan> {
        let (request, room) = self.resolve(conn)?;
        let date = request.date;

        let mut plan = OperationPlan::new(format!("Reserve {} on {date}", room.name));
        if date == self.today {
            plan = plan.add_warning(format!("{} is booked for today", room.name));
        }

        Ok(plan.add_action(PlanAction::CreateReservation { request, room }))
    }
}
