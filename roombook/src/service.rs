//! The booking service.
//!
//! [`ReservationService`] is the entry point front ends use. Every call
//! re-reads the room registry and the reservations from the store, asks the
//! clock for today, and runs inside its own IMMEDIATE transaction that is
//! committed only on success.

use crate::clock::Clock;
use crate::database::{Database, DatabaseConfig};
use crate::date::ReservationDate;
use crate::error::Result;
use crate::operations::{
    list_reservations, CancelOptions, CancelOutcome, CancelPlan, Confirmation, ExecutionResult,
    PlanAction, PlanExecutor, ReserveOptions, ReservePlan,
};
use crate::reservation::ReservationDetails;
use crate::room::{Room, RoomId, RoomRegistry};

/// Booking operations over a reservation store.
///
/// # Examples
///
/// ```no_run
/// use roombook::clock::SystemClock;
/// use roombook::{DatabaseConfig, ReservationService, RoomId, RoomRegistry};
///
/// let mut service = ReservationService::open(
///     DatabaseConfig::new("/tmp/reservations.db"),
///     &RoomRegistry::defaults(),
///     SystemClock,
/// )
/// .unwrap();
///
/// let booked = service.make_reservation("20301001", RoomId::new(0), "Tanaka").unwrap();
/// println!("Reserved: {booked}");
/// ```
#[derive(Debug)]
pub struct ReservationService<C: Clock> {
    db: Database,
    clock: C,
}

impl<C: Clock> ReservationService<C> {
    /// Wraps an open database.
    pub const fn new(db: Database, clock: C) -> Self {
        Self { db, clock }
    }

    /// Opens the store and registers any configured rooms it lacks.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened, or
    /// [`Error::NoRoomsConfigured`](crate::Error::NoRoomsConfigured) if no
    /// rooms end up registered.
    pub fn open(config: DatabaseConfig, rooms: &RoomRegistry, clock: C) -> Result<Self> {
        let mut db = Database::open(config)?;

        let tx = db.begin_transaction()?;
        Database::register_rooms(&tx, rooms)?;
        Database::list_rooms(&tx)?.require_non_empty()?;
        tx.commit()?;

        Ok(Self::new(db, clock))
    }

    /// Returns the underlying database.
    pub const fn database(&self) -> &Database {
        &self.db
    }

    /// Returns the current room registry.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoRoomsConfigured`](crate::Error::NoRoomsConfigured) if the
    /// registry is empty.
    pub fn rooms(&self) -> Result<RoomRegistry> {
        let rooms = Database::list_rooms(self.db.connection())?;
        rooms.require_non_empty()?;
        Ok(rooms)
    }

    /// Parses operator date input and checks it is not in the past.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDateFormat`](crate::Error::InvalidDateFormat) or
    /// [`Error::PastDate`](crate::Error::PastDate).
    pub fn validate_date(&self, text: &str) -> Result<ReservationDate> {
        ReservationDate::parse(text)?.ensure_not_past(self.clock.today())
    }

    /// Checks that a room is registered.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoRoomsConfigured`](crate::Error::NoRoomsConfigured) or
    /// [`Error::UnknownRoom`](crate::Error::UnknownRoom).
    pub fn validate_room(&self, room: RoomId) -> Result<Room> {
        Ok(self.rooms()?.require(room)?.clone())
    }

    /// Returns true if `room` is free on `date`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn check_available(&self, date: ReservationDate, room: RoomId) -> Result<bool> {
        Ok(!Database::reservation_exists(self.db.connection(), date, room)?)
    }

    /// Books `room` on the date given as `YYYYMMDD` text.
    ///
    /// # Errors
    ///
    /// Returns, in order of checking:
    /// - [`Error::InvalidDateFormat`](crate::Error::InvalidDateFormat)
    /// - [`Error::PastDate`](crate::Error::PastDate)
    /// - [`Error::UnknownRoom`](crate::Error::UnknownRoom)
    /// - [`Error::ReservationConflict`](crate::Error::ReservationConflict)
    /// - [`Error::InvalidName`](crate::Error::InvalidName)
    ///
    /// Nothing is stored on any error.
    pub fn make_reservation(
        &mut self,
        date_text: &str,
        room: RoomId,
        name: &str,
    ) -> Result<ReservationDetails> {
        let options = ReserveOptions::new(ReservationDate::parse(date_text)?, room, name);
        let today = self.clock.today();

        let tx = self.db.begin_transaction()?;
        let (request, room) = ReservePlan::new(options, today).resolve(&tx)?;
        let details =
            PlanExecutor::new(&tx).apply(&PlanAction::CreateReservation { request, room })?;
        tx.commit()?;

        log::info!("reserved {details}");
        Ok(details)
    }

    /// Validates a booking and describes it without storing anything.
    ///
    /// # Errors
    ///
    /// Same as [`ReservationService::make_reservation`].
    pub fn preview_reservation(
        &mut self,
        date_text: &str,
        room: RoomId,
        name: &str,
    ) -> Result<ExecutionResult> {
        let options = ReserveOptions::new(ReservationDate::parse(date_text)?, room, name);
        let today = self.clock.today();

        let tx = self.db.begin_transaction()?;
        let plan = ReservePlan::new(options, today).build_plan(&tx)?;
        let result = PlanExecutor::new(&tx).dry_run().execute(&plan)?;
        tx.commit()?;
        Ok(result)
    }

    /// Lists all reservations in date order.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn list_reservations(&mut self) -> Result<Vec<ReservationDetails>> {
        let tx = self.db.begin_transaction()?;
        let reservations = list_reservations(&tx)?;
        tx.commit()?;
        Ok(reservations)
    }

    /// Finds the reservation a cancellation would remove.
    ///
    /// Used to show the operator what they are about to cancel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDateFormat`](crate::Error::InvalidDateFormat),
    /// [`Error::PastDate`](crate::Error::PastDate),
    /// [`Error::UnknownRoom`](crate::Error::UnknownRoom) or
    /// [`Error::NotFound`](crate::Error::NotFound).
    pub fn lookup_reservation(
        &mut self,
        date_text: &str,
        room: RoomId,
    ) -> Result<ReservationDetails> {
        let options = CancelOptions::new(ReservationDate::parse(date_text)?, room);
        let today = self.clock.today();

        let tx = self.db.begin_transaction()?;
        let details = CancelPlan::new(options, today).resolve(&tx)?;
        tx.commit()?;
        Ok(details)
    }

    /// Cancels a reservation once the operator has answered.
    ///
    /// The reservation is looked up again, so a stale lookup cannot remove
    /// the wrong record. [`Confirmation::No`] leaves it untouched.
    ///
    /// # Errors
    ///
    /// Same as [`ReservationService::lookup_reservation`].
    pub fn cancel_reservation(
        &mut self,
        date_text: &str,
        room: RoomId,
        confirm: Confirmation,
    ) -> Result<CancelOutcome> {
        let options = CancelOptions::new(ReservationDate::parse(date_text)?, room);
        let today = self.clock.today();

        let tx = self.db.begin_transaction()?;
        let target = CancelPlan::new(options, today).resolve(&tx)?;

        let outcome = match confirm {
            Confirmation::No => {
                log::info!("cancellation of {target} aborted");
                CancelOutcome::Aborted(target)
            }
            Confirmation::Yes => {
                let details =
                    PlanExecutor::new(&tx).apply(&PlanAction::DeleteReservation(target))?;
                log::info!("cancelled {details}");
                CancelOutcome::Cancelled(details)
            }
        };

        tx.commit()?;
        Ok(outcome)
    }
}
