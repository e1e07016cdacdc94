#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # tablebook
//!
//! A library for managing restaurant table reservations.
//!
//! Reservations move through a fixed lifecycle: a booking clerk creates
//! one, a server confirms it (claiming the table for a one-hour slot), and
//! it is finalized when the party leaves. Booked reservations can be
//! cancelled; confirmed ones cannot. Confirmed reservations on the same
//! table and date never overlap.
//!
//! ## Core Types
//!
//! - [`TimeSlot`]: the half-open interval a reservation occupies
//! - [`Reservation`], [`NewReservation`], [`TableNumber`] and [`Status`]
//! - [`Lifecycle`]: transactional create / confirm / finalize / cancel
//! - [`report`]: read-only projections by period, table, or server
//! - [`Error`] and [`Result`]: error handling types
//!
//! ## Examples
//!
//! ```
//! use tablebook::{TableNumber, TimeSlot};
//!
//! let table = TableNumber::try_from(5).unwrap();
//! assert_eq!(table.value(), 5);
//!
//! let a = TimeSlot::parse("19:00").unwrap();
//! let b = TimeSlot::parse("19:30").unwrap();
//! let c = TimeSlot::parse("20:00").unwrap();
//! assert!(a.overlaps(&b));
//! assert!(!a.overlaps(&c));
//! assert_eq!(a.to_string(), "19:00 - 20:00");
//! ```

pub mod config;
pub mod conflict;
pub mod database;
pub mod error;
pub mod logging;
pub mod operations;
pub mod report;
pub mod reservation;
pub mod timeslot;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder, OutputFormat};
pub use conflict::has_conflict;
pub use database::{Database, DatabaseConfig};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel};
pub use operations::{
    ConfirmOptions, CreateOptions, ExecutionResult, Lifecycle, OperationPlan, Outcome, PlanAction,
    PlanExecutor,
};
pub use report::{Availability, ReservationView};
pub use reservation::{NewReservation, Reservation, Status, TableNumber};
pub use timeslot::TimeSlot;
