//! Plan execution engine.
//!
//! This module implements the executor that takes operation plans
//! and applies them to the database.

use rusqlite::Connection;

use crate::database::Database;
use crate::error::{Error, Result};

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

    /// The reservation the plan acted on. Absent for a dry-run insert.
    pub reservation_id: Option<i64>,
}

impl ExecutionResult {
    fn new(plan: &OperationPlan, dry_run: bool, reservation_id: Option<i64>) -> Self {
        Self {
            success: true,
            dry_run,
            actions_taken: plan.actions.iter().map(PlanAction::description).collect(),
            warnings: plan.warnings.clone(),
            reservation_id,
        }
    }
}

/// Executes operation plans against a connection or open transaction.
///
/// # Examples
///
/// ```no_run
/// use tablebook::operations::{CancelPlan, PlanExecutor};
/// use tablebook::{Database, DatabaseConfig};
///
/// let mut db = Database::open(DatabaseConfig::new("/tmp/tablebook.db")).unwrap();
/// let tx = db.begin_transaction().unwrap();
/// let plan = CancelPlan::new(7).build_plan(&tx).unwrap();
///
/// let mut executor = PlanExecutor::new(&tx);
/// let result = executor.execute(&plan).unwrap();
/// assert!(result.success);
/// tx.commit().unwrap();
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
    ///
    /// In dry-run mode, the executor reports the plan but does not
    /// modify the database.
    #[must_use]
    pub const fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }

    /// Executes the given plan.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] when a guarded statement matches no row,
    /// meaning the reservation changed state after planning, or a database
    /// error if a statement fails.
    pub fn execute(&mut self, plan: &OperationPlan) -> Result<ExecutionResult> {
        if self.dry_run {
            let id = plan.actions.iter().find_map(PlanAction::reservation_id);
            return Ok(ExecutionResult::new(plan, true, id));
        }

        let mut reservation_id = None;
        for action in &plan.actions {
            reservation_id = Some(self.execute_action(action)?);
        }

        Ok(ExecutionResult::new(plan, false, reservation_id))
    }

    /// Executes a single action, returning the id of the reservation it touched.
    fn execute_action(&mut self, action: &PlanAction) -> Result<i64> {
        match action {
            PlanAction::InsertReservation(reservation) => {
                Database::insert_reservation(self.conn, reservation)
            }
            PlanAction::ConfirmReservation {
                reservation,
                server,
                confirmed_at,
            } => {
                let id = reservation.id();
                if !Database::mark_confirmed(self.conn, id, server, *confirmed_at)? {
                    return Err(Error::NotFound {
                        resource: format!("booked reservation {id}"),
                    });
                }
                Ok(id)
            }
            PlanAction::FinalizeReservation(reservation) => {
                let id = reservation.id();
                if !Database::mark_finalized(self.conn, id)? {
                    return Err(Error::NotFound {
                        resource: format!("confirmed reservation {id}"),
                    });
                }
                Ok(id)
            }
            PlanAction::DeleteReservation(reservation) => {
                let id = reservation.id();
                if !Database::delete_booked(self.conn, id)? {
                    return Err(Error::NotFound {
                        resource: format!("booked reservation {id}"),
                    });
                }
                Ok(id)
            }
        }
    }
}
