//! Plan execution engine.
//!
//! This module implements the executor that takes operation plans
//! and applies them to the database.

use rusqlite::Connection;

use crate::database::Database;
use crate::error::{Error, Result};
use crate::reservation::ReservationDetails;

use super::plan::{OperationPlan, PlanAction};

/// Result of executing a plan.
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    /// Whether the execution was successful.
    pub success: bool,

    /// Whether this was a dry-run (no actual changes made).
    pub dry_run: bool,

    /// Descriptions of actions that were taken (or would be taken in dry-run).
    pub actions_taken: Vec<String>,

    /// Warnings from the plan.
    pub warnings: Vec<String>,

    /// The reservation that was created, if any.
    pub created: Option<ReservationDetails>,

    /// The reservation that was removed, if any.
    pub deleted: Option<ReservationDetails>,
}

impl ExecutionResult {
    fn new(plan: &OperationPlan, dry_run: bool) -> Self {
        Self {
            success: true,
            dry_run,
            actions_taken: plan.actions.iter().map(PlanAction::description).collect(),
            warnings: plan.warnings.clone(),
            created: None,
            deleted: None,
        }
    }
}

/// Executes operation plans against a connection or open transaction.
///
/// The executor can run in normal mode (applying changes) or dry-run mode
/// (describing them without touching the database).
///
/// # Examples
///
/// ```no_run
/// use roombook::operations::{PlanExecutor, ReserveOptions, ReservePlan};
/// use roombook::{Database, DatabaseConfig, ReservationDate, RoomId};
///
/// let mut db = Database::open(DatabaseConfig::new("/tmp/reservations.db")).unwrap();
/// let today = ReservationDate::parse("20300101").unwrap();
/// let options = ReserveOptions::new(
///     ReservationDate::parse("20300102").unwrap(),
///     RoomId::new(0),
///     "Tanaka",
/// );
///
/// let tx = db.begin_transaction().unwrap();
/// let plan = ReservePlan::new(options, today).build_plan(&tx).unwrap();
/// let result = PlanExecutor::new(&tx).execute(&plan).unwrap();
/// tx.commit().unwrap();
/// assert!(result.created.is_some());
/// ```
pub struct PlanExecutor<'a> {
    conn: &'a Connection,
    dry_run: bool,
}

impl<'a> PlanExecutor<'a> {
    /// Creates a new plan executor.
    #[must_use]
    pub const fn new(conn: &'a Connection) -> Self {
        Self {
            conn,
            dry_run: false,
        }
    }

    /// Sets the executor to dry-run mode.
    #[must_use]
    pub const fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }

    /// Executes the given plan.
    ///
    /// If in dry-run mode, reports the plan but makes no database changes.
    /// Otherwise, applies all actions in order.
    ///
    /// # Errors
    ///
    /// Returns an error if any action fails to execute. Actions already
    /// applied are only undone if the caller drops its transaction.
    pub fn execute(&self, plan: &OperationPlan) -> Result<ExecutionResult> {
        let mut result = ExecutionResult::new(plan, self.dry_run);
        if self.dry_run {
            return Ok(result);
        }

        for action in &plan.actions {
            log::debug!("executing: {}", action.description());
            let details = self.apply(action)?;
            match action {
                PlanAction::CreateReservation { .. } => result.created = Some(details),
                PlanAction::DeleteReservation(_) => result.deleted = Some(details),
            }
        }

        Ok(result)
    }

    /// Applies one action and returns the reservation it created or removed.
    ///
    /// Ignores dry-run mode.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ReservationConflict`] if a booking raced past
    /// planning, [`Error::NotFound`] if the reservation to delete is gone,
    /// or a database error.
    pub fn apply(&self, action: &PlanAction) -> Result<ReservationDetails> {
        match action {
            PlanAction::CreateReservation { request, room } => {
                // The UNIQUE constraint rejects a booking that raced past planning
                let reservation = Database::insert_reservation(self.conn, request)?;
                Ok(reservation.with_room(room.clone()))
            }
            PlanAction::DeleteReservation(details) => {
                if !Database::delete_reservation_simple(self.conn, details.id)? {
                    return Err(Error::NotFound {
                        date: details.date,
                        room: details.room.name.clone(),
                    });
                }
                Ok(details.clone())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_util::{create_test_database, new_reservation};
    use crate::{Room, RoomId};

    fn create_plan(date: &str, room: u32, name: &str) -> OperationPlan {
        OperationPlan::new("Test").add_action(PlanAction::CreateReservation {
            request: new_reservation(date, room, name),
            room: Room::new(RoomId::new(room), "Room"),
        })
    }

    #[test]
    fn test_execute_create_reservation() {
        let db = create_test_database();
        let plan = create_plan("20300105", 0, "Tanaka");

        let result = PlanExecutor::new(db.connection()).execute(&plan).unwrap();
        assert!(result.success);
        assert!(!result.dry_run);
        assert_eq!(result.actions_taken.len(), 1);

        let created = result.created.unwrap();
        let stored = Database::get_reservation(db.connection(), created.id)
            .unwrap()
            .unwrap();
        assert_eq!(stored.holder().as_str(), "Tanaka");
    }

    #[test]
    fn test_execute_delete_reservation() {
        let mut db = create_test_database();
        let details = db
            .create_reservation(&new_reservation("20300105", 1, "Sato"))
            .unwrap()
            .with_room(Room::new(RoomId::new(1), "Sakura"));

        let plan = OperationPlan::new("Test").add_action(PlanAction::DeleteReservation(details));
        let result = PlanExecutor::new(db.connection()).execute(&plan).unwrap();

        assert_eq!(result.deleted.unwrap().holder.as_str(), "Sato");
        assert!(Database::list_all_reservations(db.connection())
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_execute_delete_vanished_reservation() {
        let mut db = create_test_database();
        let details = db
            .create_reservation(&new_reservation("20300105", 1, "Sato"))
            .unwrap()
            .with_room(Room::new(RoomId::new(1), "Sakura"));
        db.delete_reservation(details.id).unwrap();

        let plan = OperationPlan::new("Test").add_action(PlanAction::DeleteReservation(details));
        let err = PlanExecutor::new(db.connection())
            .execute(&plan)
            .unwrap_err();
        assert!(matches!(err, Error::NotFound { ref room, .. } if room == "Sakura"));
    }

    #[test]
    fn test_apply_returns_affected_reservation() {
        let db = create_test_database();
        let executor = PlanExecutor::new(db.connection());

        let created = executor
            .apply(&PlanAction::CreateReservation {
                request: new_reservation("20300105", 2, "Ito"),
                room: Room::new(RoomId::new(2), "Tsubaki"),
            })
            .unwrap();
        assert_eq!(created.room.name, "Tsubaki");

        let removed = executor
            .apply(&PlanAction::DeleteReservation(created.clone()))
            .unwrap();
        assert_eq!(removed, created);
        assert!(Database::list_all_reservations(db.connection())
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_dry_run_does_not_modify_database() {
        let db = create_test_database();
        let plan = create_plan("20300105", 0, "Tanaka");

        let result = PlanExecutor::new(db.connection())
            .dry_run()
            .execute(&plan)
            .unwrap();
        assert!(result.dry_run);
        assert!(result.created.is_none());
        assert_eq!(
            result.actions_taken,
            ["Reserve Room on 2030-01-05 for Tanaka"]
        );
        assert!(Database::list_all_reservations(db.connection())
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_execution_result_includes_warnings() {
        let db = create_test_database();
        let plan = OperationPlan::new("Test")
            .add_warning("Warning 1")
            .add_warning("Warning 2");

        let result = PlanExecutor::new(db.connection()).execute(&plan).unwrap();
        assert_eq!(result.warnings, ["Warning 1", "Warning 2"]);
    }
}
