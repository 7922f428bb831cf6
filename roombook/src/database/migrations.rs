//! Database schema management and migrations.
//!
//! This module handles database schema initialization and version checking.

use rusqlite::{Connection, Transaction, TransactionBehavior};

use crate::error::{Error, Result};

use super::schema::{
    COUNT_BOOKING_TABLES, CREATE_DATE_INDEX, CREATE_METADATA_TABLE, CREATE_RESERVATIONS_TABLE,
    CREATE_ROOMS_TABLE, CURRENT_SCHEMA_VERSION, INSERT_SCHEMA_VERSION, SELECT_SCHEMA_VERSION,
};

/// Initializes the database schema.
///
/// Creates all tables, indices, and metadata for a fresh database.
///
/// # Errors
///
/// Returns an error if any SQL statement fails to execute.
///
/// # Examples
///
/// ```
/// use rusqlite::{Connection, Transaction, TransactionBehavior};
/// use roombook::database::migrations::{get_schema_version, initialize_schema};
///
/// let conn = Connection::open_in_memory().unwrap();
/// initialize_schema(&conn).unwrap();
/// assert_eq!(get_schema_version(&conn).unwrap(), 1);
/// ```
pub fn initialize_schema(conn: &Connection) -> Result<()> {
    conn.execute(CREATE_METADATA_TABLE, [])?;
    conn.execute(CREATE_ROOMS_TABLE, [])?;
    conn.execute(CREATE_RESERVATIONS_TABLE, [])?;
    conn.execute(CREATE_DATE_INDEX, [])?;
    conn.execute(INSERT_SCHEMA_VERSION, [CURRENT_SCHEMA_VERSION])?;

    log::debug!("initialized schema version {CURRENT_SCHEMA_VERSION}");
    Ok(())
}

/// Gets the current schema version from the database.
///
/// # Errors
///
/// Returns an error if the query fails for reasons other than a missing
/// metadata table or row (both of which mean version 0).
pub fn get_schema_version(conn: &Connection) -> Result<i32> {
    match conn.query_row(SELECT_SCHEMA_VERSION, [], |row| {
        let value: String = row.get(0)?;
        value.parse::<i32>().map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
        })
    }) {
        Ok(version) => Ok(version),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(0),
        Err(e) => {
            // "no such table" surfaces as a generic SQLITE_ERROR
            if let rusqlite::Error::SqliteFailure(ref sqlite_err, _) = e {
                if sqlite_err.code == rusqlite::ErrorCode::Unknown {
                    return Ok(0);
                }
            }
            Err(e.into())
        }
    }
}

/// Checks schema compatibility and initializes if needed.
///
/// A fresh database (version 0, no booking tables) is initialized. An
/// unversioned file that already holds `rooms` or `reservations` tables was
/// written by something else and is refused, as is any version that differs
/// from [`CURRENT_SCHEMA_VERSION`].
///
/// The check and the initialization share one IMMEDIATE transaction so that
/// concurrent first opens of the same file initialize it exactly once.
///
/// # Errors
///
/// Returns [`Error::UnsupportedSchemaVersion`] for a foreign or unversioned
/// layout, or a database error if initialization fails.
pub fn check_schema_compatibility(conn: &Connection) -> Result<()> {
    let tx = Transaction::new_unchecked(conn, TransactionBehavior::Immediate)?;
    let version = get_schema_version(&tx)?;

    if version == 0 {
        if has_booking_tables(&tx)? {
            return Err(Error::UnsupportedSchemaVersion {
                expected: CURRENT_SCHEMA_VERSION,
                found: 0,
            });
        }
        initialize_schema(&tx)?;
    } else if version != CURRENT_SCHEMA_VERSION {
        return Err(Error::UnsupportedSchemaVersion {
            expected: CURRENT_SCHEMA_VERSION,
            found: version,
        });
    }

    tx.commit()?;
    Ok(())
}

/// Whether `rooms` or `reservations` tables already exist.
fn has_booking_tables(conn: &Connection) -> Result<bool> {
    let count: i64 = conn.query_row(COUNT_BOOKING_TABLES, [], |row| row.get(0))?;
    Ok(count > 0)
}

/// Checks the schema version without initializing anything.
///
/// Used for read-only connections.
///
/// # Errors
///
/// Returns [`Error::UnsupportedSchemaVersion`] unless the stored version is
/// exactly [`CURRENT_SCHEMA_VERSION`].
pub fn verify_schema_version(conn: &Connection) -> Result<()> {
    let version = get_schema_version(conn)?;
    if version == CURRENT_SCHEMA_VERSION {
        Ok(())
    } else {
        Err(Error::UnsupportedSchemaVersion {
            expected: CURRENT_SCHEMA_VERSION,
            found: version,
        })
    }
}
