//! Cancel operation planning.
//!
//! Cancelling is two-phase: the plan locates the reservation so it can be
//! shown to the operator, and only an explicit [`Confirmation::Yes`] lets
//! the caller execute it.

use std::fmt;
use std::str::FromStr;

use rusqlite::Connection;
use serde::Serialize;

use crate::database::Database;
use crate::date::ReservationDate;
use crate::error::{Error, Result};
use crate::reservation::ReservationDetails;
use crate::room::RoomId;

use super::plan::{OperationPlan, PlanAction};

/// An operator's answer to "cancel this reservation?".
///
/// # Examples
///
/// ```
/// use roombook::operations::Confirmation;
///
/// assert_eq!(Confirmation::parse("Y").unwrap(), Confirmation::Yes);
/// assert_eq!(Confirmation::parse(" no ").unwrap(), Confirmation::No);
/// assert!(Confirmation::parse("maybe").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    /// Go ahead and cancel.
    Yes,
    /// Keep the reservation.
    No,
}

impl Confirmation {
    /// Parses a yes/no answer, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfirmation`] for anything other than
    /// `y`, `yes`, `n` or `no`.
    pub fn parse(raw: &str) -> Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" => Ok(Self::Yes),
            "n" | "no" => Ok(Self::No),
            _ => Err(Error::InvalidConfirmation {
                input: raw.to_string(),
            }),
        }
    }
}

impl FromStr for Confirmation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<bool> for Confirmation {
    fn from(confirmed: bool) -> Self {
        if confirmed {
            Self::Yes
        } else {
            Self::No
        }
    }
}

/// How a cancellation request ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "reservation", rename_all = "snake_case")]
pub enum CancelOutcome {
    /// The reservation was removed.
    Cancelled(ReservationDetails),
    /// The operator declined; the reservation is untouched.
    Aborted(ReservationDetails),
}

impl CancelOutcome {
    /// Returns the reservation the request was about.
    #[must_use]
    pub const fn details(&self) -> &ReservationDetails {
        match self {
            Self::Cancelled(details) | Self::Aborted(details) => details,
        }
    }

    /// Returns true if the reservation was removed.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled(_))
    }
}

impl fmt::Display for CancelOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled(details) => write!(f, "Cancelled: {details}"),
            Self::Aborted(details) => write!(f, "Kept: {details}"),
        }
    }
}

/// Options for a cancel operation.
#[derive(Debug, Clone, Copy)]
pub struct CancelOptions {
    /// The reserved date.
    pub date: ReservationDate,
    /// The reserved room.
    pub room: RoomId,
}

impl CancelOptions {
    /// Creates cancel options.
    #[must_use]
    pub const fn new(date: ReservationDate, room: RoomId) -> Self {
        Self { date, room }
    }
}

/// A cancellation plan generator.
pub struct CancelPlan {
    options: CancelOptions,
    today: ReservationDate,
}

impl CancelPlan {
    /// Creates a new cancel plan evaluated against `today`.
    #[must_use]
    pub const fn new(options: CancelOptions, today: ReservationDate) -> Self {
        Self { options, today }
    }

    /// Finds the reservation this request would remove.
    ///
    /// Does NOT modify the database.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PastDate`], [`Error::NoRoomsConfigured`] or
    /// [`Error::UnknownRoom`] for invalid input, and [`Error::NotFound`] if
    /// no reservation holds the room on that date.
    pub fn resolve(&self, conn: &Connection) -> Result<ReservationDetails> {
        let date = self.options.date.ensure_not_past(self.today)?;

        let rooms = Database::list_rooms(conn)?;
        let room = rooms
            .require_non_empty()?
            .require(self.options.room)?
            .clone();

        let Some(reservation) = Database::find_reservation(conn, date, room.id)? else {
            return Err(Error::NotFound {
                date,
                room: room.name,
            });
        };

        Ok(reservation.with_room(room))
    }

    /// Builds an operation plan removing the matching reservation.
    ///
    /// # Errors
    ///
    /// Same as [`CancelPlan::resolve`].
    pub fn build_plan(&self, conn: &Connection) -> Result<OperationPlan> {
        let details = self.resolve(conn)?;
        Ok(OperationPlan::new(format!("Cancel {details}"))
            .add_action(PlanAction::DeleteReservation(details)))
    }
}
