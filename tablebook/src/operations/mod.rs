//! Reservation operations using the plan-execute pattern.
//!
//! This module separates planning from execution to enable dry-run mode,
//! focused testing, and clear error messages.
//!
//! # Architecture
//!
//! Operations are split into two phases:
//! 1. **Planning**: validates the request against the store and builds a plan
//! 2. **Execution**: applies the plan's guarded statements
//!
//! [`Lifecycle`] runs both phases inside one IMMEDIATE transaction, which is
//! what callers normally want.
//!
//! # Examples
//!
//! ```no_run
//! use tablebook::operations::{ConfirmOptions, CreateOptions, Lifecycle};
//! use tablebook::{Database, DatabaseConfig};
//!
//! let mut db = Database::open(DatabaseConfig::new("/tmp/tablebook.db")).unwrap();
//!
//! let created = Lifecycle::new(&mut db)
//!     .create(CreateOptions::new("2099-03-14", "19:00", 5, 4, "Ana"))
//!     .unwrap();
//! let id = created.id.unwrap();
//!
//! Lifecycle::new(&mut db)
//!     .confirm(ConfirmOptions::new(id, "Joao"))
//!     .unwrap();
//! Lifecycle::new(&mut db).finalize(id).unwrap();
//! ```

pub mod cancel;
pub mod confirm;
pub mod create;
pub mod executor;
pub mod finalize;
pub mod init;
pub mod lifecycle;
pub mod plan;

pub use cancel::CancelPlan;
pub use confirm::{ConfirmOptions, ConfirmPlan};
pub use create::{CreateOptions, CreatePlan};
pub use executor::{ExecutionResult, PlanExecutor};
pub use finalize::FinalizePlan;
pub use init::{init_database, InitOptions, InitResult};
pub use lifecycle::{Lifecycle, Outcome};
pub use plan::{OperationPlan, PlanAction};
