//! Transactional entry points for the reservation lifecycle.
//!
//! Each operation opens one IMMEDIATE transaction, builds its plan inside
//! it, executes the plan, and commits. Any error drops the transaction,
//! which rolls it back. In dry-run mode the plan is built and validated but
//! the transaction is never committed.

use rusqlite::Connection;

use crate::database::Database;
use crate::error::Result;
use crate::reservation::Status;

use super::cancel::CancelPlan;
use super::confirm::{ConfirmOptions, ConfirmPlan};
use super::create::{CreateOptions, CreatePlan};
use super::executor::{ExecutionResult, PlanExecutor};
use super::finalize::FinalizePlan;
use super::plan::OperationPlan;

/// What a lifecycle operation did.
#[derive(Debug, Clone)]
pub struct Outcome {
    /// The reservation id. Absent only for a dry-run create.
    pub id: Option<i64>,
    /// Status after the operation; `None` once the reservation is deleted.
    pub status: Option<Status>,
    /// Display-formatted slot.
    pub time_range: String,
    /// Whether changes were rolled back instead of committed.
    pub dry_run: bool,
    /// Descriptions of the actions taken or planned.
    pub actions: Vec<String>,
    /// Warnings raised while planning.
    pub warnings: Vec<String>,
}

impl Outcome {
    fn from_execution(
        plan: &OperationPlan,
        result: ExecutionResult,
        status: Option<Status>,
    ) -> Self {
        Self {
            id: result.reservation_id,
            status,
            time_range: plan
                .actions
                .first()
                .map(super::plan::PlanAction::time_range)
                .unwrap_or_default(),
            dry_run: result.dry_run,
            actions: result.actions_taken,
            warnings: result.warnings,
        }
    }
}

/// Runs lifecycle operations against a store.
///
/// # Examples
///
/// ```no_run
/// use tablebook::operations::{CreateOptions, Lifecycle};
/// use tablebook::{Database, DatabaseConfig};
///
/// let mut db = Database::open(DatabaseConfig::new("/tmp/tablebook.db")).unwrap();
/// let outcome = Lifecycle::new(&mut db)
///     .create(CreateOptions::new("2099-03-14", "19:00", 5, 4, "Ana"))
///     .unwrap();
/// println!("reservation {:?} at {}", outcome.id, outcome.time_range);
/// ```
pub struct Lifecycle<'a> {
    db: &'a mut Database,
    dry_run: bool,
}

impl<'a> Lifecycle<'a> {
    /// Creates a lifecycle runner over `db`.
    pub fn new(db: &'a mut Database) -> Self {
        Self { db, dry_run: false }
    }

    /// Sets dry-run mode.
    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Books a table. The new reservation is in the booked state.
    ///
    /// # Errors
    ///
    /// Returns the first failed rule from [`CreatePlan::build_plan`], or a
    /// database error.
    pub fn create(&mut self, options: CreateOptions) -> Result<Outcome> {
        let outcome = self.run(Some(Status::Booked), |conn| {
            CreatePlan::new(options).build_plan(conn)
        })?;
        if let Some(id) = outcome.id {
            log::info!("created reservation {id} at {}", outcome.time_range);
        }
        Ok(outcome)
    }

    /// Confirms a booked reservation on behalf of a server.
    ///
    /// # Errors
    ///
    /// See [`ConfirmPlan::build_plan`].
    pub fn confirm(&mut self, options: ConfirmOptions) -> Result<Outcome> {
        let outcome = self.run(Some(Status::Confirmed), |conn| {
            ConfirmPlan::new(options).build_plan(conn)
        })?;
        log::info!("confirmed reservation {:?}", outcome.id);
        Ok(outcome)
    }

    /// Finalizes a confirmed reservation.
    ///
    /// # Errors
    ///
    /// See [`FinalizePlan::build_plan`].
    pub fn finalize(&mut self, id: i64) -> Result<Outcome> {
        let outcome = self.run(Some(Status::Finalized), |conn| {
            FinalizePlan::new(id).build_plan(conn)
        })?;
        log::info!("finalized reservation {id}");
        Ok(outcome)
    }

    /// Cancels (deletes) a booked reservation.
    ///
    /// # Errors
    ///
    /// See [`CancelPlan::build_plan`].
    pub fn cancel(&mut self, id: i64) -> Result<Outcome> {
        let outcome = self.run(None, |conn| CancelPlan::new(id).build_plan(conn))?;
        log::info!("cancelled reservation {id}");
        Ok(outcome)
    }

    fn run<F>(&mut self, status: Option<Status>, build: F) -> Result<Outcome>
    where
        F: FnOnce(&Connection) -> Result<OperationPlan>,
    {
        let tx = self.db.begin_transaction()?;
        let plan = build(&tx)?;

        let mut executor = PlanExecutor::new(&tx);
        if self.dry_run {
            executor = executor.dry_run();
        }
        let result = executor.execute(&plan)?;

        if self.dry_run {
            log::debug!("dry run: rolling back '{}'", plan.description);
        } else {
            tx.commit()?;
        }

        Ok(Outcome::from_execution(&plan, result, status))
    }
}
