//! Plan types for reservation operations.
//!
//! This module defines the plan structures that describe what actions
//! will be taken during an operation, without actually performing them.

use chrono::NaiveDateTime;

use crate::reservation::{NewReservation, Reservation};
use crate::timeslot::format_date;

/// A single action to be taken during plan execution.
///
/// Each action corresponds to one guarded statement against the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanAction {
    /// Insert a new booked reservation.
    InsertReservation(NewReservation),

    /// Move a booked reservation to confirmed.
    ConfirmReservation {
        /// The reservation as it was read during planning.
        reservation: Reservation,
        /// The confirming server's name.
        server: String,
        /// Wall-clock moment of confirmation.
        confirmed_at: NaiveDateTime,
    },

    /// Move a confirmed reservation to finalized.
    FinalizeReservation(Reservation),

    /// Delete a booked reservation.
    DeleteReservation(Reservation),
}

impl PlanAction {
    /// Returns a human-readable description of this action.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::InsertReservation(r) => format!(
                "Book table {} on {} at {} for {} guest(s) under '{}'",
                r.table(),
                format_date(r.date()),
                r.time_range(),
                r.party_size(),
                r.responsible()
            ),
            Self::ConfirmReservation {
                reservation,
                server,
                ..
            } => format!(
                "Confirm reservation {} (table {}, {} {}) for server '{server}'",
                reservation.id(),
                reservation.table(),
                reservation.date_string(),
                reservation.time_range()
            ),
            Self::FinalizeReservation(r) => {
                format!("Finalize reservation {} on table {}", r.id(), r.table())
            }
            Self::DeleteReservation(r) => format!(
                "Cancel reservation {} (table {}, {} {})",
                r.id(),
                r.table(),
                r.date_string(),
                r.time_range()
            ),
        }
    }

    /// The id of the reservation this action touches, if it already exists.
    #[must_use]
    pub const fn reservation_id(&self) -> Option<i64> {
        match self {
            Self::InsertReservation(_) => None,
            Self::ConfirmReservation { reservation, .. }
            | Self::FinalizeReservation(reservation)
            | Self::DeleteReservation(reservation) => Some(reservation.id()),
        }
    }

    /// Display-formatted slot of the reservation this action touches.
    #[must_use]
    pub fn time_range(&self) -> String {
        match self {
            Self::InsertReservation(r) => r.time_range(),
            Self::ConfirmReservation { reservation, .. }
            | Self::FinalizeReservation(reservation)
            | Self::DeleteReservation(reservation) => reservation.time_range(),
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
    /// use tablebook::operations::OperationPlan;
    ///
    /// let plan = OperationPlan::new("Cancel reservation 7");
    /// assert_eq!(plan.description, "Cancel reservation 7");
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
    ///
    /// # Examples
    ///
    /// ```
    /// use tablebook::operations::OperationPlan;
    ///
    /// let plan = OperationPlan::new("Test")
    ///     .add_warning("party of 12 at a single table");
    ///
    /// assert_eq!(plan.warnings.len(), 1);
    /// ```
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
}
