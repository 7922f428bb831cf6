//! Database layer for persistent storage of rooms and reservations.
//!
//! This module provides a SQLite-based store with connection management,
//! schema versioning, and the CRUD operations the booking service builds on.
//! The one-reservation-per-(date, room) rule is enforced by a UNIQUE
//! constraint in the schema.
//!
//! # Examples
//!
//! ```no_run
//! use roombook::database::{Database, DatabaseConfig};
//! use roombook::{HolderName, NewReservation, ReservationDate, RoomId, RoomRegistry};
//!
//! let mut db = Database::open(DatabaseConfig::new("/tmp/reservations.db")).unwrap();
//! Database::register_rooms(db.connection(), &RoomRegistry::defaults()).unwrap();
//!
//! let new = NewReservation::new(
//!     ReservationDate::parse("20301001").unwrap(),
//!     RoomId::new(1),
//!     HolderName::new("Sato").unwrap(),
//! );
//! db.create_reservation(&new).unwrap();
//!
//! for reservation in Database::list_all_reservations(db.connection()).unwrap() {
//!     println!("{} {}", reservation.date(), reservation.holder());
//! }
//! ```

mod config;
mod connection;
pub mod migrations;
mod operations;
mod schema;
#[cfg(test)]
pub(crate) mod test_util;
mod transaction;

// Re-export public API
pub use config::{
    default_data_dir, resolve_database_path, DatabaseConfig, DATABASE_FILE_NAME, DATA_DIR_ENV,
};
pub use connection::Database;

// Re-export migration functions for advanced use cases
pub use migrations::{check_schema_compatibility, get_schema_version, initialize_schema};
