//! Reservation types for tracking table bookings.
//!
//! This module provides the reservation record as stored, the validated
//! payload used to insert a new one, and the small value types (table
//! numbers, lifecycle status) they are built from.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::timeslot::{format_date, format_range, format_time, TimeSlot};

/// Lowest table number in the dining room.
pub const MIN_TABLE: u8 = 1;

/// Highest table number in the dining room.
pub const MAX_TABLE: u8 = 20;

/// Error raised when a reservation field fails validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the validation failure.
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// A physical table identifier in `[MIN_TABLE, MAX_TABLE]`.
///
/// # Examples
///
/// ```
/// use tablebook::TableNumber;
///
/// let table = TableNumber::try_from(5).unwrap();
/// assert_eq!(table.value(), 5);
///
/// assert!(TableNumber::try_from(0).is_err());
/// assert!(TableNumber::try_from(21).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct TableNumber(u8);

impl TableNumber {
    /// Returns the table number.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for TableNumber {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value < i64::from(MIN_TABLE) || value > i64::from(MAX_TABLE) {
            return Err(ValidationError {
                field: "mesa".into(),
                message: format!("table must be between {MIN_TABLE} and {MAX_TABLE}, got {value}"),
            });
        }
        // Range checked above
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Ok(Self(value as u8))
    }
}

impl From<TableNumber> for u8 {
    fn from(table: TableNumber) -> Self {
        table.0
    }
}

impl fmt::Display for TableNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle state of a reservation.
///
/// The serialized form is the text stored in the `status` column.
///
/// # Examples
///
/// ```
/// use tablebook::Status;
///
/// assert_eq!(Status::Booked.as_str(), "reservada");
/// assert_eq!("confirmada".parse::<Status>().unwrap(), Status::Confirmed);
/// assert_eq!(Status::Finalized.to_string(), "finalized");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Created by the clerk, not yet claimed by a server.
    #[serde(rename = "reservada")]
    Booked,
    /// Claimed by a server; blocks overlapping slots.
    #[serde(rename = "confirmada")]
    Confirmed,
    /// Service completed.
    #[serde(rename = "finalizada")]
    Finalized,
}

impl Status {
    /// Returns the text stored in the database for this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Booked => "reservada",
            Self::Confirmed => "confirmada",
            Self::Finalized => "finalizada",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Booked => write!(f, "booked"),
            Self::Confirmed => write!(f, "confirmed"),
            Self::Finalized => write!(f, "finalized"),
        }
    }
}

impl FromStr for Status {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reservada" => Ok(Self::Booked),
            "confirmada" => Ok(Self::Confirmed),
            "finalizada" => Ok(Self::Finalized),
            other => Err(ValidationError {
                field: "status".into(),
                message: format!("unknown reservation status '{other}'"),
            }),
        }
    }
}

/// A validated reservation that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReservation {
    date: NaiveDate,
    slot: TimeSlot,
    table: TableNumber,
    party_size: u32,
    responsible: String,
}

impl NewReservation {
    /// Creates a new reservation payload.
    ///
    /// # Errors
    ///
    /// Returns an error if the party is empty or the responsible name is blank.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use tablebook::timeslot::TimeSlot;
    /// use tablebook::{NewReservation, TableNumber};
    ///
    /// let reservation = NewReservation::new(
    ///     NaiveDate::from_ymd_opt(2099, 3, 14).unwrap(),
    ///     TimeSlot::parse("19:00").unwrap(),
    ///     TableNumber::try_from(5).unwrap(),
    ///     4,
    ///     "Ana".to_string(),
    /// )
    /// .unwrap();
    /// assert_eq!(reservation.time_range(), "19:00 - 20:00");
    /// ```
    pub fn new(
        date: NaiveDate,
        slot: TimeSlot,
        table: TableNumber,
        party_size: u32,
        responsible: String,
    ) -> Result<Self, ValidationError> {
        if party_size == 0 {
            return Err(ValidationError {
                field: "pessoas".into(),
                message: "party size must be at least 1".into(),
            });
        }

        let responsible = responsible.trim();
        if responsible.is_empty() {
            return Err(ValidationError {
                field: "responsavel".into(),
                message: "responsible person must be non-empty".into(),
            });
        }

        Ok(Self {
            date,
            slot,
            table,
            party_size,
            responsible: responsible.to_string(),
        })
    }

    /// Reservation day.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// The interval the reservation will occupy.
    #[must_use]
    pub const fn slot(&self) -> TimeSlot {
        self.slot
    }

    /// Table number.
    #[must_use]
    pub const fn table(&self) -> TableNumber {
        self.table
    }

    /// Number of guests.
    #[must_use]
    pub const fn party_size(&self) -> u32 {
        self.party_size
    }

    /// Booking contact name.
    #[must_use]
    pub fn responsible(&self) -> &str {
        &self.responsible
    }

    /// Display-formatted time range.
    #[must_use]
    pub fn time_range(&self) -> String {
        self.slot.to_string()
    }
}

/// A stored reservation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    pub(crate) id: i64,
    pub(crate) date: NaiveDate,
    pub(crate) start: Option<NaiveTime>,
    pub(crate) start_text: String,
    pub(crate) end: Option<NaiveTime>,
    pub(crate) table: TableNumber,
    pub(crate) party_size: u32,
    pub(crate) responsible: String,
    pub(crate) status: Status,
    pub(crate) server: Option<String>,
    pub(crate) confirmed_at: Option<NaiveDateTime>,
}

impl Reservation {
    /// System-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> i64 {
        self.id
    }

    /// Reservation day.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Slot start. `None` when the stored text is not a valid `HH:MM` time.
    #[must_use]
    pub const fn start(&self) -> Option<NaiveTime> {
        self.start
    }

    /// Slot start exactly as stored.
    #[must_use]
    pub fn start_text(&self) -> &str {
        &self.start_text
    }

    /// Stored slot end. Absent on legacy rows whose start could not be
    /// migrated, and when the stored text does not parse.
    #[must_use]
    pub const fn end(&self) -> Option<NaiveTime> {
        self.end
    }

    /// Table number.
    #[must_use]
    pub const fn table(&self) -> TableNumber {
        self.table
    }

    /// Number of guests.
    #[must_use]
    pub const fn party_size(&self) -> u32 {
        self.party_size
    }

    /// Booking contact name.
    #[must_use]
    pub fn responsible(&self) -> &str {
        &self.responsible
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Server who confirmed the reservation.
    #[must_use]
    pub fn server(&self) -> Option<&str> {
        self.server.as_deref()
    }

    /// Wall-clock moment of confirmation.
    #[must_use]
    pub const fn confirmed_at(&self) -> Option<NaiveDateTime> {
        self.confirmed_at
    }

    /// The occupied slot, computing the end when it was never stored.
    ///
    /// `None` when the stored times cannot be placed on the clock.
    #[must_use]
    pub fn slot(&self) -> Option<TimeSlot> {
        let start = self.start?;
        match self.end {
            Some(end) if start < end => Some(TimeSlot::from_bounds(start, end)),
            Some(_) => None,
            None => TimeSlot::starting_at(start).ok(),
        }
    }

    /// Display-formatted time range, or the raw stored start when it does
    /// not parse.
    #[must_use]
    pub fn time_range(&self) -> String {
        match self.start {
            Some(start) => {
                let end = self.end.map(format_time);
                format_range(&format_time(start), end.as_deref())
            }
            None => self.start_text.clone(),
        }
    }

    /// Canonical date text.
    #[must_use]
    pub fn date_string(&self) -> String {
        format_date(self.date)
    }
}
