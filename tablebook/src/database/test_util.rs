//! Shared test utilities for database unit tests.

use chrono::NaiveDate;
use rusqlite::Connection;
use tempfile::tempdir;

use crate::database::{Database, DatabaseConfig};
use crate::reservation::{NewReservation, Status, TableNumber};
use crate::timeslot::TimeSlot;

/// Creates a temporary test database that will be cleaned up automatically.
///
/// # Panics
///
/// Panics if the temporary directory or database cannot be created.
#[must_use]
pub fn create_test_database() -> Database {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.db");
    let config = DatabaseConfig::new(path);
    let db = Database::open(config).unwrap();

    // Prevent the TempDir from being dropped immediately
    std::mem::forget(dir);

    db
}

/// Shorthand for a calendar date.
#[must_use]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Creates a reservation for two guests booked by "Ana".
///
/// # Panics
///
/// Panics if the start time or table is invalid.
#[must_use]
pub fn sample_reservation(date: NaiveDate, start: &str, table: i64) -> NewReservation {
    NewReservation::new(
        date,
        TimeSlot::parse(start).unwrap(),
        TableNumber::try_from(table).unwrap(),
        2,
        "Ana".to_string(),
    )
    .unwrap()
}

/// Inserts a reservation and moves it directly into `status`.
///
/// Confirmed and finalized rows are attributed to server "Joao".
///
/// # Panics
///
/// Panics if any statement fails.
pub fn insert_with_status(
    conn: &Connection,
    date: NaiveDate,
    start: &str,
    table: i64,
    status: Status,
) -> i64 {
    let id = Database::insert_reservation(conn, &sample_reservation(date, start, table)).unwrap();
    let at = date.and_hms_opt(8, 0, 0).unwrap();
    match status {
        Status::Booked => {}
        Status::Confirmed => {
            assert!(Database::mark_confirmed(conn, id, "Joao", at).unwrap());
        }
        Status::Finalized => {
            assert!(Database::mark_confirmed(conn, id, "Joao", at).unwrap());
            assert!(Database::mark_finalized(conn, id).unwrap());
        }
    }
    id
}
