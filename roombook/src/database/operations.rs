//! Database CRUD operations for rooms and reservations.
//!
//! Associated functions taking a `&Connection` work equally inside a
//! `Transaction`; the `&mut self` wrappers open their own IMMEDIATE
//! transaction.

use std::time::{Duration, SystemTime};

use rusqlite::{params, Connection, OptionalExtension, TransactionBehavior};

use crate::date::ReservationDate;
use crate::error::{Error, Result};
use crate::reservation::{HolderName, NewReservation, Reservation, ReservationId};
use crate::room::{Room, RoomId, RoomRegistry};

use super::connection::Database;
use super::schema::{DELETE_RESERVATION, INSERT_RESERVATION, INSERT_ROOM};

/// Converts a `SystemTime` to Unix epoch seconds for database storage.
///
/// # Errors
///
/// Returns an error if the time is before the Unix epoch.
#[allow(clippy::cast_possible_wrap)]
pub(super) fn systemtime_to_unix_secs(time: SystemTime) -> Result<i64> {
    time.duration_since(SystemTime::UNIX_EPOCH)
        .map_err(|e| Error::Validation {
            field: "timestamp".into(),
            message: format!("Invalid timestamp: {e}"),
        })
        .map(|d| d.as_secs() as i64)
}

/// Converts Unix epoch seconds from the database to a `SystemTime`.
#[allow(clippy::cast_sign_loss)]
pub(super) fn unix_secs_to_systemtime(secs: i64) -> SystemTime {
    SystemTime::UNIX_EPOCH + Duration::from_secs(secs.max(0) as u64)
}

/// A reservation row as stored, before domain validation.
struct StoredReservation {
    id: i64,
    date: String,
    room_id: u32,
    name: String,
    created_at: i64,
}

impl StoredReservation {
    /// Expects row fields in this order: id, date, `room_id`, name, `created_at`.
    fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            date: row.get(1)?,
            room_id: row.get(2)?,
            name: row.get(3)?,
            created_at: row.get(4)?,
        })
    }

    fn into_reservation(self) -> Result<Reservation> {
        let date = ReservationDate::from_storage(&self.date)?;
        let holder = HolderName::new(&self.name).map_err(|e| Error::DatabaseCorruption {
            details: format!("reservation {} has an invalid holder name: {e}", self.id),
        })?;
        Ok(Reservation::from_parts(
            ReservationId::new(self.id),
            NewReservation::new(date, RoomId::new(self.room_id), holder),
            unix_secs_to_systemtime(self.created_at),
        ))
    }
}

const SELECT_EXISTS: &str = r"
    SELECT EXISTS(SELECT 1 FROM reservations WHERE date = ? AND room_id = ?)
";

const LIST_RESERVATIONS: &str = r"
    SELECT id, date, room_id, name, created_at
    FROM reservations
    ORDER BY date, id
";

const SELECT_BY_DATE_AND_ROOM: &str = r"
    SELECT id, date, room_id, name, created_at
    FROM reservations
    WHERE date = ? AND room_id = ?
";

const SELECT_BY_ID: &str = r"
    SELECT id, date, room_id, name, created_at
    FROM reservations
    WHERE id = ?
";

const LIST_ROOMS: &str = "SELECT id, name FROM rooms ORDER BY id";

const SELECT_ROOM_NAME: &str = "SELECT name FROM rooms WHERE id = ?";

/// Returns the extended result code of a constraint violation, if any.
fn constraint_violation(err: &rusqlite::Error) -> Option<std::os::raw::c_int> {
    match err {
        rusqlite::Error::SqliteFailure(e, _)
            if e.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            Some(e.extended_code)
        }
        _ => None,
    }
}

impl Database {
    /// Checks whether a live reservation holds `room` on `date`.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn reservation_exists(
        conn: &Connection,
        date: ReservationDate,
        room: RoomId,
    ) -> Result<bool> {
        let exists: bool = conn.query_row(
            SELECT_EXISTS,
            params![date.to_storage(), room.value()],
            |row| row.get(0),
        )?;
        Ok(exists)
    }

    /// Inserts a reservation using an existing connection or transaction.
    ///
    /// The (date, room) uniqueness is enforced by the table itself, so this
    /// is safe against writers racing past an earlier existence check.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ReservationConflict`] if the room is already booked
    /// on that date, [`Error::UnknownRoom`] if the room is not registered, or
    /// a database error for any other failure.
    pub fn insert_reservation(conn: &Connection, new: &NewReservation) -> Result<Reservation> {
        let created_at = SystemTime::now();
        let created_secs = systemtime_to_unix_secs(created_at)?;

        let inserted = conn.execute(
            INSERT_RESERVATION,
            params![
                new.date.to_storage(),
                new.room.value(),
                new.holder.as_str(),
                created_secs,
            ],
        );

        match inserted {
            Ok(_) => {
                let id = ReservationId::new(conn.last_insert_rowid());
                log::debug!("inserted reservation {id} for room {} on {}", new.room, new.date);
                Ok(Reservation::from_parts(
                    id,
                    new.clone(),
                    unix_secs_to_systemtime(created_secs),
                ))
            }
            Err(e) => match constraint_violation(&e) {
                Some(rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE) => Err(Error::ReservationConflict {
                    date: new.date,
                    room: Self::room_display_name(conn, new.room)?,
                }),
                Some(rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY) => {
                    Err(Error::UnknownRoom { room: new.room })
                }
                _ => Err(e.into()),
            },
        }
    }

    /// Creates a reservation in its own IMMEDIATE transaction.
    ///
    /// # Errors
    ///
    /// Same as [`Database::insert_reservation`], plus transaction failures.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use roombook::database::{Database, DatabaseConfig};
    /// use roombook::{HolderName, NewReservation, ReservationDate, RoomId, RoomRegistry};
    ///
    /// let mut db = Database::open(DatabaseConfig::new("/tmp/reservations.db")).unwrap();
    /// Database::register_rooms(db.connection(), &RoomRegistry::defaults()).unwrap();
    ///
    /// let new = NewReservation::new(
    ///     ReservationDate::parse("20301001").unwrap(),
    ///     RoomId::new(0),
    ///     HolderName::new("Tanaka").unwrap(),
    /// );
    /// let reservation = db.create_reservation(&new).unwrap();
    /// println!("created {}", reservation.id());
    /// ```
    pub fn create_reservation(&mut self, new: &NewReservation) -> Result<Reservation> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        let reservation = Self::insert_reservation(&tx, new)?;
        tx.commit()?;
        Ok(reservation)
    }

    /// Lists all reservations ordered by date, then by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row is malformed.
    pub fn list_all_reservations(conn: &Connection) -> Result<Vec<Reservation>> {
        let mut stmt = conn.prepare(LIST_RESERVATIONS)?;
        let rows = stmt.query_map([], StoredReservation::from_row)?;

        let mut reservations = Vec::new();
        for row in rows {
            reservations.push(row?.into_reservation()?);
        }
        Ok(reservations)
    }

    /// Finds the reservation holding `room` on `date`.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the stored row is malformed.
    pub fn find_reservation(
        conn: &Connection,
        date: ReservationDate,
        room: RoomId,
    ) -> Result<Option<Reservation>> {
        conn.query_row(
            SELECT_BY_DATE_AND_ROOM,
            params![date.to_storage(), room.value()],
            StoredReservation::from_row,
        )
        .optional()?
        .map(StoredReservation::into_reservation)
        .transpose()
    }

    /// Retrieves a reservation by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the stored row is malformed.
    pub fn get_reservation(conn: &Connection, id: ReservationId) -> Result<Option<Reservation>> {
        conn.query_row(SELECT_BY_ID, [id.value()], StoredReservation::from_row)
            .optional()?
            .map(StoredReservation::into_reservation)
            .transpose()
    }

    /// Deletes a reservation in its own IMMEDIATE transaction.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if a reservation was removed
    /// - `Ok(false)` if no reservation had that id
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction or delete fails.
    pub fn delete_reservation(&mut self, id: ReservationId) -> Result<bool> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        let deleted = Self::delete_reservation_simple(&tx, id)?;
        tx.commit()?;
        Ok(deleted)
    }

    /// Deletes a reservation using an existing connection or transaction.
    ///
    /// Deleting an id that does not exist is a no-op returning `false`.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_reservation_simple(conn: &Connection, id: ReservationId) -> Result<bool> {
        let rows_affected = conn.execute(DELETE_RESERVATION, [id.value()])?;
        Ok(rows_affected > 0)
    }

    /// Lists the registered rooms ordered by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_rooms(conn: &Connection) -> Result<RoomRegistry> {
        let mut stmt = conn.prepare(LIST_ROOMS)?;
        let rooms = stmt
            .query_map([], |row| {
                Ok(Room::new(RoomId::new(row.get(0)?), row.get::<_, String>(1)?))
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(RoomRegistry::new(rooms))
    }

    /// Registers every room in `registry` that is not stored yet.
    ///
    /// Rooms are immutable once registered: an existing id keeps its stored
    /// name, and a differing configured name is only logged.
    ///
    /// Returns the number of rooms newly registered.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if a room name is already registered
    /// under a different id, or a database error if an insert fails.
    pub fn register_rooms(conn: &Connection, registry: &RoomRegistry) -> Result<usize> {
        let mut registered = 0;
        for room in registry {
            if conn.execute(INSERT_ROOM, params![room.id.value(), room.name])? > 0 {
                registered += 1;
                continue;
            }

            match Self::room_name(conn, room.id)? {
                Some(stored) if stored != room.name => {
                    log::warn!(
                        "room {} is registered as '{stored}'; ignoring configured name '{}'",
                        room.id,
                        room.name
                    );
                }
                Some(_) => {}
                None => {
                    return Err(Error::Validation {
                        field: "rooms".into(),
                        message: format!(
                            "room name '{}' is already registered under another id",
                            room.name
                        ),
                    });
                }
            }
        }

        if registered > 0 {
            log::debug!("registered {registered} room(s)");
        }
        Ok(registered)
    }

    /// Verifies database integrity.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DatabaseCorruption`] if `PRAGMA integrity_check`
    /// reports anything other than `ok`.
    pub fn verify_integrity(&self) -> Result<()> {
        let result: String = self
            .conn
            .query_row("PRAGMA integrity_check", [], |row| row.get(0))?;

        if result == "ok" {
            Ok(())
        } else {
            Err(Error::DatabaseCorruption {
                details: format!("Integrity check failed: {result}"),
            })
        }
    }

    fn room_name(conn: &Connection, room: RoomId) -> Result<Option<String>> {
        Ok(conn
            .query_row(SELECT_ROOM_NAME, [room.value()], |row| row.get(0))
            .optional()?)
    }

    fn room_display_name(conn: &Connection, room: RoomId) -> Result<String> {
        Ok(Self::room_name(conn, room)?.unwrap_or_else(|| format!("room {room}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_util::{create_test_database, new_reservation};

    #[test]
    fn test_create_and_find_reservation() {
        let mut db = create_test_database();
        let new = new_reservation("20300105", 0, "Tanaka");

        let created = db.create_reservation(&new).unwrap();
        assert_eq!(created.holder().as_str(), "Tanaka");

        let found = Database::find_reservation(db.connection(), new.date, new.room)
            .unwrap()
            .unwrap();
        assert_eq!(found.id(), created.id());
        assert_eq!(found.room(), RoomId::new(0));
        assert_eq!(found.holder().as_str(), "Tanaka");
        assert_eq!(found.created_at(), created.created_at());
    }

    #[test]
    fn test_reservation_exists() {
        let mut db = create_test_database();
        let new = new_reservation("20300105", 1, "Sato");
        assert!(!Database::reservation_exists(db.connection(), new.date, new.room).unwrap());

        db.create_reservation(&new).unwrap();
        assert!(Database::reservation_exists(db.connection(), new.date, new.room).unwrap());

        // Same date, other room
        assert!(!Database::reservation_exists(db.connection(), new.date, RoomId::new(2)).unwrap());
    }

    #[test]
    fn test_insert_conflict_names_room() {
        let mut db = create_test_database();
        db.create_reservation(&new_reservation("20300105", 0, "Tanaka"))
            .unwrap();

        let err = db
            .create_reservation(&new_reservation("20300105", 0, "Suzuki"))
            .unwrap_err();
        match err {
            Error::ReservationConflict { date, room } => {
                assert_eq!(date.to_string(), "2030-01-05");
                assert_eq!(room, "Fuji");
            }
            other => panic!("expected conflict, got {other:?}"),
        }

        let all = Database::list_all_reservations(db.connection()).unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].holder().as_str(), "Tanaka");
    }

    #[test]
    fn test_insert_unregistered_room() {
        let mut db = create_test_database();
        let err = db
            .create_reservation(&new_reservation("20300105", 5, "X"))
            .unwrap_err();
        assert!(matches!(err, Error::UnknownRoom { room } if room == RoomId::new(5)));
        assert!(Database::list_all_reservations(db.connection())
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_list_all_reservations_ordered_by_date() {
        let mut db = create_test_database();
        db.create_reservation(&new_reservation("20300310", 0, "C"))
            .unwrap();
        db.create_reservation(&new_reservation("20300101", 2, "A"))
            .unwrap();
        db.create_reservation(&new_reservation("20300101", 1, "B"))
            .unwrap();
        db.create_reservation(&new_reservation("20291231", 0, "Z"))
            .unwrap();

        let all = Database::list_all_reservations(db.connection()).unwrap();
        let holders: Vec<_> = all.iter().map(|r| r.holder().as_str()).collect();
        // Same-date ties keep insertion order
        assert_eq!(holders, ["Z", "A", "B", "C"]);
    }

    #[test]
    fn test_list_all_reservations_empty() {
        let db = create_test_database();
        assert!(Database::list_all_reservations(db.connection())
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_get_reservation_by_id() {
        let mut db = create_test_database();
        let created = db
            .create_reservation(&new_reservation("20300105", 2, "Ito"))
            .unwrap();

        let fetched = Database::get_reservation(db.connection(), created.id())
            .unwrap()
            .unwrap();
        assert_eq!(fetched, created);

        let missing = Database::get_reservation(db.connection(), ReservationId::new(9999)).unwrap();
        assert!(missing.is_none());
    }

    #[test]
    fn test_delete_reservation_is_idempotent() {
        let mut db = create_test_database();
        let created = db
            .create_reservation(&new_reservation("20300105", 0, "Tanaka"))
            .unwrap();

        assert!(db.delete_reservation(created.id()).unwrap());
        assert!(!db.delete_reservation(created.id()).unwrap());
        assert!(
            Database::find_reservation(db.connection(), created.date(), created.room())
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut db = create_test_database();
        let first = db
            .create_reservation(&new_reservation("20300105", 0, "A"))
            .unwrap();
        db.delete_reservation(first.id()).unwrap();

        let second = db
            .create_reservation(&new_reservation("20300105", 0, "B"))
            .unwrap();
        assert!(second.id() > first.id());
    }

    #[test]
    fn test_list_rooms() {
        let db = create_test_database();
        let rooms = Database::list_rooms(db.connection()).unwrap();
        assert_eq!(rooms, RoomRegistry::defaults());
    }

    #[test]
    fn test_register_rooms_keeps_stored_names() {
        let db = create_test_database();
        let renamed = RoomRegistry::new(vec![
            Room::new(RoomId::new(0), "Everest"),
            Room::new(RoomId::new(3), "Kiku"),
        ]);

        let registered = Database::register_rooms(db.connection(), &renamed).unwrap();
        assert_eq!(registered, 1);

        let rooms = Database::list_rooms(db.connection()).unwrap();
        assert_eq!(rooms.len(), 4);
        assert_eq!(rooms.display_name(RoomId::new(0)), "Fuji");
        assert_eq!(rooms.display_name(RoomId::new(3)), "Kiku");
    }

    #[test]
    fn test_register_rooms_rejects_name_under_other_id() {
        let db = create_test_database();
        let clash = RoomRegistry::new(vec![Room::new(RoomId::new(7), "Fuji")]);
        let err = Database::register_rooms(db.connection(), &clash).unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
    }

    #[test]
    fn test_corrupt_stored_date() {
        let db = create_test_database();
        db.connection()
            .execute(
                "INSERT INTO reservations (date, room_id, name, created_at) VALUES ('not-a-date', 0, 'X', 0)",
                [],
            )
            .unwrap();

        let err = Database::list_all_reservations(db.connection()).unwrap_err();
        assert!(matches!(err, Error::DatabaseCorruption { .. }));
    }

    #[test]
    fn test_verify_integrity() {
        let db = create_test_database();
        db.verify_integrity().unwrap();
    }
}
