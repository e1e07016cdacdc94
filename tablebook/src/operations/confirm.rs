//! Confirm operation planning.

use chrono::{Local, NaiveDateTime};
use rusqlite::Connection;

use crate::conflict::has_conflict;
use crate::database::Database;
use crate::error::{Error, Result};
use crate::reservation::Status;
use crate::timeslot::format_time;

use super::plan::{OperationPlan, PlanAction};

/// Options for a confirm operation.
#[derive(Debug, Clone)]
pub struct ConfirmOptions {
    /// The reservation to confirm.
    pub id: i64,

    /// Name of the confirming server.
    pub server: String,

    /// Confirmation moment. Defaults to local wall clock.
    pub now: Option<NaiveDateTime>,
}

impl ConfirmOptions {
    /// Creates new `ConfirmOptions`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tablebook::operations::ConfirmOptions;
    ///
    /// let options = ConfirmOptions::new(7, "Joao");
    /// assert_eq!(options.server, "Joao");
    /// ```
    #[must_use]
    pub fn new(id: i64, server: impl Into<String>) -> Self {
        Self {
            id,
            server: server.into(),
            now: None,
        }
    }

    /// Pins the confirmation moment.
    #[must_use]
    pub const fn with_now(mut self, now: NaiveDateTime) -> Self {
        self.now = Some(now);
        self
    }
}

/// A confirm plan generator.
pub struct ConfirmPlan {
    options: ConfirmOptions,
}

impl ConfirmPlan {
    /// Creates a new confirm plan with the given options.
    #[must_use]
    pub const fn new(options: ConfirmOptions) -> Self {
        Self { options }
    }

    /// Builds an operation plan for this confirmation.
    ///
    /// The slot is re-checked against confirmed reservations, excluding the
    /// reservation itself, because another booking on the same table may
    /// have been confirmed since this one was created.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingField`] for a blank server name
    /// - [`Error::NotFound`] unless the reservation exists and is booked
    /// - [`Error::SlotInUse`] when a confirmed reservation overlaps
    pub fn build_plan(&self, conn: &Connection) -> Result<OperationPlan> {
        let id = self.options.id;
        let server = self.options.server.trim();
        if server.is_empty() {
            return Err(Error::MissingField {
                field: "garcom".into(),
            });
        }

        let reservation = Database::get_reservation(conn, id)?
            .filter(|r| r.status() == Status::Booked)
            .ok_or_else(|| Error::NotFound {
                resource: format!("booked reservation {id}"),
            })?;

        let date = reservation.date_string();
        let start = reservation
            .start()
            .map_or_else(|| reservation.start_text().to_string(), format_time);
        // A slot that cannot be placed might overlap anything
        if reservation.slot().is_none()
            || has_conflict(conn, reservation.table(), &date, &start, Some(id))?
        {
            return Err(Error::SlotInUse {
                table: reservation.table().value(),
                date,
                time: start,
            });
        }

        let confirmed_at = self
            .options
            .now
            .unwrap_or_else(|| Local::now().naive_local());

        Ok(
            OperationPlan::new(format!("Confirm reservation {id} for '{server}'")).add_action(
                PlanAction::ConfirmReservation {
                    reservation,
                    server: server.to_string(),
                    confirmed_at,
                },
            ),
        )
    }
}
