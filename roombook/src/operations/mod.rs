//! Booking operations using the plan-execute pattern.
//!
//! Operations are split into two phases:
//! 1. **Planning**: validates the request against the current state and
//!    builds a plan
//! 2. **Execution**: applies the plan's actions to the database
//!
//! Both phases take a `&Connection`, so callers run them inside a single
//! IMMEDIATE transaction and commit only when execution succeeds.
//!
//! # Examples
//!
//! ```no_run
//! use roombook::operations::{PlanExecutor, ReserveOptions, ReservePlan};
//! use roombook::{Database, DatabaseConfig, ReservationDate, RoomId};
//!
//! let mut db = Database::open(DatabaseConfig::new("/tmp/reservations.db")).unwrap();
//! let today = ReservationDate::parse("20300101").unwrap();
//! let options = ReserveOptions::new(
//!     ReservationDate::parse("20300105").unwrap(),
//!     RoomId::new(1),
//!     "Sato",
//! );
//!
//! let tx = db.begin_transaction().unwrap();
//! let plan = ReservePlan::new(options, today).build_plan(&tx).unwrap();
//! let result = PlanExecutor::new(&tx).execute(&plan).unwrap();
//! tx.commit().unwrap();
//! ```

pub mod cancel;
pub mod executor;
pub mod init;
pub mod list;
pub mod plan;
pub mod reserve;

#[cfg(test)]
mod proptests;

pub use cancel::{CancelOptions, CancelOutcome, CancelPlan, Confirmation};
pub use executor::{ExecutionResult, PlanExecutor};
pub use init::{init_database, InitOptions, InitResult};
pub use list::list_reservations;
pub use plan::{OperationPlan, PlanAction};
pub use reserve::{ReserveOptions, ReservePlan};
