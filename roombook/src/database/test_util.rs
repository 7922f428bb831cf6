//! Shared test utilities for database unit tests.

use tempfile::tempdir;

use crate::database::{Database, DatabaseConfig};
use crate::{HolderName, NewReservation, ReservationDate, RoomId, RoomRegistry};

/// Creates a temporary database with the default rooms registered.
///
/// # Panics
///
/// Panics if the temporary directory or database cannot be created.
#[must_use]
pub fn create_test_database() -> Database {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.db");
    let db = Database::open(DatabaseConfig::new(path)).unwrap();
    Database::register_rooms(db.connection(), &RoomRegistry::defaults()).unwrap();

    // Keep the directory alive for the life of the test process
    std::mem::forget(dir);

    db
}

/// Builds a reservation request from operator-style input.
///
/// # Panics
///
/// Panics if the date or name is invalid.
#[must_use]
pub fn new_reservation(date: &str, room: u32, name: &str) -> NewReservation {
    NewReservation::new(
        ReservationDate::parse(date).unwrap(),
        RoomId::new(room),
        HolderName::new(name).unwrap(),
    )
}
