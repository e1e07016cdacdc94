//! Slot conflict detection.
//!
//! A candidate slot conflicts with a table's schedule when it overlaps any
//! confirmed reservation on the same table and date. The checker fails
//! closed: an unparseable candidate or stored time counts as a conflict.

use rusqlite::Connection;

use crate::database::Database;
use crate::error::Result;
use crate::reservation::TableNumber;
use crate::timeslot::{compute_end, parse_time, TimeSlot};

/// A confirmed reservation's slot as stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupiedSlot {
    /// Reservation id.
    pub id: i64,
    /// Stored start text.
    pub start: String,
    /// Stored end text, absent on legacy rows.
    pub end: Option<String>,
}

impl OccupiedSlot {
    /// Parses the stored bounds, computing a missing end from the start.
    ///
    /// Returns `None` when the stored values do not form a valid slot.
    #[must_use]
    pub fn slot(&self) -> Option<TimeSlot> {
        let start = parse_time(&self.start).ok()?;
        let end = match &self.end {
            Some(end) => parse_time(end).ok()?,
            None => compute_end(start).ok()?,
        };
        (start < end).then(|| TimeSlot::from_bounds(start, end))
    }
}

/// Decides whether `candidate_start` collides with any of `occupied`.
///
/// # Examples
///
/// ```
/// use tablebook::conflict::{conflicts_with, OccupiedSlot};
///
/// let occupied = vec![OccupiedSlot {
///     id: 1,
///     start: "19:00".into(),
///     end: Some("20:00".into()),
/// }];
///
/// assert!(conflicts_with("19:30", &occupied));
/// assert!(!conflicts_with("20:00", &occupied));
/// assert!(conflicts_with("not a time", &occupied));
/// assert!(!conflicts_with("19:00", &[]));
/// ```
#[must_use]
pub fn conflicts_with(candidate_start: &str, occupied: &[OccupiedSlot]) -> bool {
    if occupied.is_empty() {
        return false;
    }

    let Ok(candidate) = TimeSlot::parse(candidate_start) else {
        log::debug!("unparseable candidate start '{candidate_start}' counts as a conflict");
        return true;
    };

    occupied.iter().any(|existing| match existing.slot() {
        Some(slot) => slot.overlaps(&candidate),
        None => {
            log::warn!(
                "reservation {} has an unreadable slot ({} - {:?}); treating as conflict",
                existing.id,
                existing.start,
                existing.end
            );
            true
        }
    })
}

/// Checks whether a slot starting at `candidate_start` on `table`/`date`
/// overlaps a confirmed reservation.
///
/// `exclude` skips one reservation id, so a reservation being confirmed does
/// not collide with itself.
///
/// # Errors
///
/// Returns an error if the store query fails.
///
/// # Examples
///
/// ```no_run
/// use tablebook::conflict::has_conflict;
/// use tablebook::database::{Database, DatabaseConfig};
/// use tablebook::TableNumber;
///
/// let db = Database::open(DatabaseConfig::new("/tmp/tablebook.db")).unwrap();
/// let table = TableNumber::try_from(5).unwrap();
/// let busy = has_conflict(db.connection(), table, "2099-03-14", "19:30", None).unwrap();
/// ```
pub fn has_conflict(
    conn: &Connection,
    table: TableNumber,
    date: &str,
    candidate_start: &str,
    exclude: Option<i64>,
) -> Result<bool> {
    let occupied = Database::confirmed_slots(conn, table, date, exclude)?;
    Ok(conflicts_with(candidate_start, &occupied))
}
