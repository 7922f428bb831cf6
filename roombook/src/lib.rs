#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # roombook
//!
//! A library for managing whole-day room reservations.
//!
//! A reservation books one registered room for one calendar day on behalf
//! of a named holder. At most one reservation exists per room and day, and
//! dates before today are rejected.
//!
//! ## Core Types
//!
//! - [`ReservationDate`]: Calendar dates parsed from `YYYYMMDD`
//! - [`Room`], [`RoomId`] and [`RoomRegistry`]: The bookable rooms
//! - [`Reservation`] and [`ReservationDetails`]: Stored bookings
//! - [`ReservationService`]: The booking operations behind every front end
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use roombook::{ReservationDate, RoomId, RoomRegistry};
//!
//! let date = ReservationDate::parse("20300105").unwrap();
//! assert_eq!(date.to_string(), "2030-01-05");
//!
//! let rooms = RoomRegistry::defaults();
//! assert_eq!(rooms.require(RoomId::new(1)).unwrap().name, "Sakura");
//! ```

pub mod clock;
pub mod config;
pub mod database;
pub mod date;
pub mod error;
pub mod logging;
pub mod operations;
pub mod reservation;
pub mod room;
pub mod service;

// Re-export key types at crate root for convenience
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{Config, ConfigBuilder};
pub use database::{Database, DatabaseConfig};
pub use date::ReservationDate;
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use operations::{
    CancelOptions, CancelOutcome, CancelPlan, Confirmation, ExecutionResult, OperationPlan,
    PlanAction, PlanExecutor, ReserveOptions, ReservePlan,
};
pub use reservation::{HolderName, NewReservation, Reservation, ReservationDetails, ReservationId};
pub use room::{Room, RoomId, RoomRegistry};
pub use service::ReservationService;
