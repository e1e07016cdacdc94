//! Create operation planning.
//!
//! This module implements the booking rules: input validation, the
//! strictly-future check, duplicate detection, and the slot conflict check.

use chrono::{Local, NaiveDateTime};
use rusqlite::Connection;

use crate::conflict::has_conflict;
use crate::database::Database;
use crate::error::{Error, Result};
use crate::reservation::{NewReservation, TableNumber};
use crate::timeslot::{format_date, format_time, parse_date, TimeSlot};

use super::plan::{OperationPlan, PlanAction};

/// Options for a create operation.
///
/// Fields hold the request exactly as received; validation happens while
/// the plan is built.
#[derive(Debug, Clone)]
pub struct CreateOptions {
    /// Reservation date, `YYYY-MM-DD`.
    pub date: String,

    /// Slot start, `HH:MM`.
    pub time: String,

    /// Requested table number.
    pub table: i64,

    /// Number of guests.
    pub party_size: i64,

    /// Booking contact name.
    pub responsible: String,

    /// Reference moment for the future check. Defaults to local wall clock.
    pub now: Option<NaiveDateTime>,
}

impl CreateOptions {
    /// Creates new `CreateOptions` from raw request values.
    ///
    /// # Examples
    ///
    /// ```
    /// use tablebook::operations::CreateOptions;
    ///
    /// let options = CreateOptions::new("2099-03-14", "19:00", 5, 4, "Ana");
    /// assert_eq!(options.table, 5);
    /// assert!(options.now.is_none());
    /// ```
    #[must_use]
    pub fn new(
        date: impl Into<String>,
        time: impl Into<String>,
        table: i64,
        party_size: i64,
        responsible: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
            table,
            party_size,
            responsible: responsible.into(),
            now: None,
        }
    }

    /// Pins the reference moment used by the future check.
    #[must_use]
    pub const fn with_now(mut self, now: NaiveDateTime) -> Self {
        self.now = Some(now);
        self
    }
}

/// A create plan generator.
pub struct CreatePlan {
    options: CreateOptions,
}

impl CreatePlan {
    /// Creates a new create plan with the given options.
    #[must_use]
    pub const fn new(options: CreateOptions) -> Self {
        Self { options }
    }

    /// Builds an operation plan for this booking request.
    ///
    /// Checks run in a fixed order and the first failure is returned:
    /// table range, party size, responsible name, date, time, future check,
    /// exact duplicate of a booked reservation, overlap with a confirmed one.
    /// It does NOT modify the database.
    ///
    /// # Errors
    ///
    /// - [`Error::Validation`] for a bad table, party size, or date
    /// - [`Error::MissingField`] for a blank responsible name
    /// - [`Error::InvalidTimeFormat`] for a bad or cross-midnight start
    /// - [`Error::PastDateTime`] when the slot does not start after now
    /// - [`Error::DuplicateSlot`] when the exact slot is already booked
    /// - [`Error::SlotInUse`] when a confirmed reservation overlaps
    pub fn build_plan(&self, conn: &Connection) -> Result<OperationPlan> {
        let opts = &self.options;

        let table = TableNumber::try_from(opts.table)?;

        let party_size = u32::try_from(opts.party_size)
            .ok()
            .filter(|&n| n >= 1)
            .ok_or_else(|| Error::Validation {
                field: "pessoas".into(),
                message: format!("party size must be a positive integer, got {}", opts.party_size),
            })?;

        if opts.responsible.trim().is_empty() {
            return Err(Error::MissingField {
                field: "responsavel".into(),
            });
        }

        let date = parse_date(&opts.date)?;
        let slot = TimeSlot::parse(&opts.time)?;

        let date_text = format_date(date);
        let start_text = format_time(slot.start());

        let now = opts.now.unwrap_or_else(|| Local::now().naive_local());
        if date.and_time(slot.start()) <= now {
            return Err(Error::PastDateTime {
                date: date_text,
                time: start_text,
            });
        }

        if Database::booked_slot_exists(conn, table, date, slot.start())? {
            return Err(Error::DuplicateSlot {
                table: table.value(),
                date: date_text,
                time: start_text,
            });
        }

        if has_conflict(conn, table, &date_text, &start_text, None)? {
            return Err(Error::SlotInUse {
                table: table.value(),
                date: date_text,
                time: start_text,
            });
        }

        let reservation =
            NewReservation::new(date, slot, table, party_size, opts.responsible.clone())?;

        Ok(OperationPlan::new(format!(
            "Book table {table} on {date_text} at {slot}"
        ))
        .add_action(PlanAction::InsertReservation(reservation)))
    }
}
