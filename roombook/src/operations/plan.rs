//! Plan types for booking operations.
//!
//! This module defines the plan structures that describe what actions
//! will be taken during an operation, without actually performing them.

use crate::reservation::{NewReservation, ReservationDetails};
use crate::room::Room;

/// A single action to be taken during plan execution.
///
/// Each action corresponds to a specific database operation that will
/// be performed when the plan is executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanAction {
    /// Store a new reservation.
    CreateReservation {
        /// The validated request.
        request: NewReservation,
        /// The requested room, for display.
        room: Room,
    },

    /// Remove an existing reservation.
    DeleteReservation(ReservationDetails),
}

impl PlanAction {
    /// Returns a human-readable description of this action.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::CreateReservation { request, room } => {
                format!(
                    "Reserve {} on {} for {}",
                    room.name, request.date, request.holder
                )
            }
            Self::DeleteReservation(details) => {
                format!("Cancel reservation {} ({details})", details.id)
            }
        }
    }
}

/// A complete operation plan describing all actions to be taken.
///
/// Plans are generated during the planning phase and can be inspected,
/// logged, or executed. They include a description, a sequence of actions,
/// and any warnings that should be communicated to the user.
#[derive(Debug, Clone)]
pub struct OperationPlan {
    /// A human-readable description of the operation.
    pub description: String,

    /// The sequence of actions to perform.
    pub actions: Vec<PlanAction>,

    /// Warnings to communicate to the user.
    pub warnings: Vec<String>,
}

impl OperationPlan {
    /// Creates a new operation plan with the given description.
    ///
    /// # Examples
    ///
    /// ```
    /// use roombook::operations::OperationPlan;
    ///
    /// let plan = OperationPlan::new("Reserve Fuji on 2030-10-01");
    /// assert_eq!(plan.description, "Reserve Fuji on 2030-10-01");
    /// assert!(plan.is_empty());
    /// ```
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            actions: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Adds an action to the plan.
    #[must_use]
    pub fn add_action(mut self, action: PlanAction) -> Self {
        self.actions.push(action);
        self
    }

    /// Adds a warning to the plan.
    #[must_use]
    pub fn add_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    /// Checks if the plan has no actions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Returns the number of actions in the plan.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Returns the reservation this plan would remove, if any.
    #[must_use]
    pub fn deletion_target(&self) -> Option<&ReservationDetails> {
        self.actions.iter().find_map(|action| match action {
            PlanAction::DeleteReservation(details) => Some(details),
            PlanAction::CreateReservation { .. } => None,
        })
    }
}
