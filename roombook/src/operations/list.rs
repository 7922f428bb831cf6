//! Reservation listing.

use rusqlite::Connection;

use crate::database::Database;
use crate::error::Result;
use crate::reservation::ReservationDetails;
use crate::room::Room;

/// Lists all reservations in date order, joined with their room names.
///
/// An empty result is a normal outcome.
///
/// # Errors
///
/// Returns an error if the database cannot be read.
pub fn list_reservations(conn: &Connection) -> Result<Vec<ReservationDetails>> {
    let rooms = Database::list_rooms(conn)?;
    let reservations = Database::list_all_reservations(conn)?;

    Ok(reservations
        .into_iter()
        .map(|reservation| {
            let room = rooms.get(reservation.room()).cloned().unwrap_or_else(|| {
                Room::new(reservation.room(), rooms.display_name(reservation.room()))
            });
            reservation.with_room(room)
        })
        .collect())
}
