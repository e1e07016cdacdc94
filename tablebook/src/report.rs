//! Read-only reservation reports.
//!
//! Reports depend on the store only. Each row is projected to a
//! [`ReservationView`], whose field names match the JSON the HTTP API
//! returns; confirmation timestamps are not exposed.

use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::Connection;
use serde::Serialize;

use crate::database::Database;
use crate::error::Result;
use crate::reservation::{Reservation, Status, TableNumber};
use crate::timeslot::format_date;

/// Public projection of a stored reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReservationView {
    /// Reservation id.
    pub id: i64,
    /// Date, `YYYY-MM-DD`.
    pub data: String,
    /// Formatted slot, `"HH:MM - HH:MM"`.
    pub hora: String,
    /// Table number.
    pub mesa: u8,
    /// Party size.
    pub pessoas: u32,
    /// Booking contact name.
    pub responsavel: String,
    /// Lifecycle status.
    pub status: Status,
    /// Confirming server, if any.
    pub garcom: Option<String>,
}

impl From<&Reservation> for ReservationView {
    fn from(r: &Reservation) -> Self {
        Self {
            id: r.id(),
            data: r.date_string(),
            hora: r.time_range(),
            mesa: r.table().value(),
            pessoas: r.party_size(),
            responsavel: r.responsible().to_string(),
            status: r.status(),
            garcom: r.server().map(str::to_string),
        }
    }
}

/// Occupied slots of one table on one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Availability {
    /// Table number.
    pub mesa: u8,
    /// Date, `YYYY-MM-DD`.
    pub data: String,
    /// Formatted ranges of confirmed reservations.
    pub horarios_ocupados: Vec<String>,
}

fn views(reservations: &[Reservation]) -> Vec<ReservationView> {
    reservations.iter().map(ReservationView::from).collect()
}

/// Reservations dated within `[start, end]`, both ends inclusive.
///
/// An inverted period matches nothing.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub fn by_period(
    conn: &Connection,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<ReservationView>> {
    Ok(views(&Database::list_by_period(conn, start, end)?))
}

/// Every reservation on a table, in any status.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub fn by_table(conn: &Connection, table: TableNumber) -> Result<Vec<ReservationView>> {
    Ok(views(&Database::list_by_table(conn, table)?))
}

/// Reservations confirmed by `server`.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub fn by_server(conn: &Connection, server: &str) -> Result<Vec<ReservationView>> {
    Ok(views(&Database::list_by_server(conn, server.trim())?))
}

/// Booked reservations awaiting confirmation, ordered by date and time.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub fn pending(conn: &Connection) -> Result<Vec<ReservationView>> {
    Ok(views(&Database::list_by_status(conn, Status::Booked)?))
}

/// Confirmed reservations whose slot contains `now`.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub fn in_use(conn: &Connection, now: NaiveDateTime) -> Result<Vec<ReservationView>> {
    let today = Database::list_by_status_on(conn, Status::Confirmed, now.date())?;
    Ok(today
        .iter()
        .filter(|r| r.slot().is_some_and(|slot| slot.contains(now.time())))
        .map(ReservationView::from)
        .collect())
}

/// Occupied slots of `table` on `date`.
///
/// Only confirmed reservations occupy a table.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub fn availability(
    conn: &Connection,
    table: TableNumber,
    date: NaiveDate,
) -> Result<Availability> {
    let confirmed = Database::list_by_status_on(conn, Status::Confirmed, date)?;
    Ok(Availability {
        mesa: table.value(),
        data: format_date(date),
        horarios_ocupados: confirmed
            .iter()
            .filter(|r| r.table() == table)
            .map(Reservation::time_range)
            .collect(),
    })
}
