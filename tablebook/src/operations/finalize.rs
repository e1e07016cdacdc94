//! Finalize operation planning.

use rusqlite::Connection;

use crate::database::Database;
use crate::error::{Error, Result};
use crate::reservation::Status;

use super::plan::{OperationPlan, PlanAction};

/// A finalize plan generator.
pub struct FinalizePlan {
    id: i64,
}

impl FinalizePlan {
    /// Creates a plan to finalize reservation `id`.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self { id }
    }

    /// Builds an operation plan for finalizing the reservation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] unless the reservation exists and is
    /// confirmed.
    pub fn build_plan(&self, conn: &Connection) -> Result<OperationPlan> {
        let id = self.id;
        let reservation = Database::get_reservation(conn, id)?
            .filter(|r| r.status() == Status::Confirmed)
            .ok_or_else(|| Error::NotFound {
                resource: format!("confirmed reservation {id}"),
            })?;

        Ok(OperationPlan::new(format!("Finalize reservation {id}"))
            .add_action(PlanAction::FinalizeReservation(reservation)))
    }
}
