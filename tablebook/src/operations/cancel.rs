//! Cancel operation planning.
//!
//! Cancellation is the only way a reservation is ever removed, and it is
//! allowed only while the reservation is still booked.

use rusqlite::Connection;

use crate::database::Database;
use crate::error::{Error, Result};
use crate::reservation::Status;

use super::plan::{OperationPlan, PlanAction};

/// A cancel plan generator.
pub struct CancelPlan {
    id: i64,
}

impl CancelPlan {
    /// Creates a plan to cancel reservation `id`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tablebook::operations::CancelPlan;
    ///
    /// let planner = CancelPlan::new(7);
    /// ```
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self { id }
    }

    /// Builds an operation plan for cancelling the reservation.
    ///
    /// # Errors
    ///
    /// - [`Error::NotFound`] if no reservation has this id
    /// - [`Error::AlreadyConfirmed`] if it has been confirmed or finalized
    pub fn build_plan(&self, conn: &Connection) -> Result<OperationPlan> {
        let id = self.id;
        let reservation = Database::get_reservation(conn, id)?.ok_or_else(|| Error::NotFound {
            resource: format!("reservation {id}"),
        })?;

        if reservation.status() != Status::Booked {
            return Err(Error::AlreadyConfirmed {
                id,
                status: reservation.status(),
            });
        }

        Ok(OperationPlan::new(format!("Cancel reservation {id}"))
            .add_action(PlanAction::DeleteReservation(reservation)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_util::{create_test_database, date, insert_with_status};

    #[test]
    fn test_cancel_booked() {
        let db = create_test_database();
        let id = insert_with_status(db.connection(), date(2099, 3, 14), "12:00", 1, Status::Booked);

        let plan = CancelPlan::new(id).build_plan(db.connection()).unwrap();
        assert_eq!(plan.len(), 1);
        assert!(plan.actions[0].description().contains("Cancel reservation"));
    }

    #[test]
    fn test_cancel_missing() {
        let db = create_test_database();
        let err = CancelPlan::new(5).build_plan(db.connection()).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_cancel_after_confirmation_is_refused() {
        let db = create_test_database();
        let conn = db.connection();
        let confirmed = insert_with_status(conn, date(2099, 3, 14), "12:00", 1, Status::Confirmed);
        let finalized = insert_with_status(conn, date(2099, 3, 14), "14:00", 1, Status::Finalized);

        let err = CancelPlan::new(confirmed).build_plan(conn).unwrap_err();
        assert!(matches!(
            err,
            Error::AlreadyConfirmed {
                status: Status::Confirmed,
                ..
            }
        ));

        let err = CancelPlan::new(finalized).build_plan(conn).unwrap_err();
        assert!(matches!(
            err,
            Error::AlreadyConfirmed {
                status: Status::Finalized,
                ..
            }
        ));
    }
}
