//! Common test utilities for integration tests.

use std::path::Path;

use roombook::clock::FixedClock;
use roombook::{DatabaseConfig, ReservationDate, ReservationService, RoomRegistry};
use tempfile::TempDir;

/// The day every fixed-clock test treats as today.
pub const TODAY: &str = "20300110";
/// The day after [`TODAY`].
pub const TOMORROW: &str = "20300111";
/// The day before [`TODAY`].
#[allow(dead_code)]
pub const YESTERDAY: &str = "20300109";

/// Clock pinned to [`TODAY`].
pub fn fixed_clock() -> FixedClock {
    FixedClock::new(ReservationDate::parse(TODAY).unwrap())
}

/// Database configuration for `reservations.db` inside `dir`.
pub fn db_config(dir: &Path) -> DatabaseConfig {
    DatabaseConfig::new(dir.join("reservations.db"))
}

/// Opens a service over a fresh store holding the default rooms.
#[allow(dead_code)]
pub fn open_service() -> (TempDir, ReservationService<FixedClock>) {
    let dir = TempDir::new().unwrap();
    let service =
        ReservationService::open(db_config(dir.path()), &RoomRegistry::defaults(), fixed_clock())
            .unwrap();
    (dir, service)
}
