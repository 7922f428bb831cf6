//! Database schema definitions and SQL constants.
//!
//! This module contains all SQL table definitions, indices, and statements
//! used by the room reservation store.

/// Current schema version for the database.
///
/// This version is stored in the metadata table and is used to ensure
/// compatibility between the database and the application.
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// SQL statement to create the metadata table.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// SQL statement to create the rooms table.
pub const CREATE_ROOMS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS rooms (
        id INTEGER PRIMARY KEY NOT NULL,
        name TEXT NOT NULL UNIQUE
    )";

/// SQL statement to create the reservations table.
///
/// The UNIQUE constraint on (date, `room_id`) is what enforces at most one
/// live reservation per room per day, including under concurrent writers.
/// AUTOINCREMENT keeps ids monotonic and never reused.
pub const CREATE_RESERVATIONS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS reservations (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        date TEXT NOT NULL,
        room_id INTEGER NOT NULL REFERENCES rooms(id),
        name TEXT NOT NULL,
        created_at INTEGER NOT NULL,
        UNIQUE (date, room_id)
    )";

/// SQL statement to create an index on the date column.
///
/// This index serves the date-ordered listing.
pub const CREATE_DATE_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_reservations_date ON reservations(date)";

/// SQL statement to select the schema version from the metadata table.
pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

/// SQL statement counting booking tables, used to tell a fresh file from an
/// unversioned one.
pub const COUNT_BOOKING_TABLES: &str = r"
    SELECT COUNT(*) FROM sqlite_master
    WHERE type = 'table' AND name IN ('rooms', 'reservations')
";

/// SQL statement to insert or update the schema version in the metadata table.
pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";

/// SQL statement to insert a reservation.
pub const INSERT_RESERVATION: &str = r"
    INSERT INTO reservations (date, room_id, name, created_at)
    VALUES (?, ?, ?, ?)
";

/// SQL statement to delete a reservation by id.
pub const DELETE_RESERVATION: &str = "DELETE FROM reservations WHERE id = ?";

/// SQL statement to register a room unless its id is already taken.
pub const INSERT_ROOM: &str = "INSERT OR IGNORE INTO rooms (id, name) VALUES (?, ?)";
