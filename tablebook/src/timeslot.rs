//! Time slot arithmetic for table reservations.
//!
//! Every reservation occupies a table for a fixed duration starting at its
//! booked time. Slots are half-open intervals `[start, end)` on a single
//! calendar day: a slot ending at 20:00 does not collide with one starting at
//! 20:00, and slots never cross midnight.
//!
//! # Examples
//!
//! ```
//! use tablebook::timeslot::{format_range, TimeSlot};
//!
//! let dinner = TimeSlot::parse("19:00").unwrap();
//! let late = TimeSlot::parse("19:30").unwrap();
//! let next = TimeSlot::parse("20:00").unwrap();
//!
//! assert!(dinner.overlaps(&late));
//! assert!(!dinner.overlaps(&next));
//! assert_eq!(dinner.to_string(), "19:00 - 20:00");
//! assert_eq!(format_range("19:00", None), "19:00");
//! ```

use std::fmt;

use chrono::{Duration, NaiveDate, NaiveTime};

use crate::error::{Error, Result};

/// Storage and wire format for times of day.
pub const TIME_FORMAT: &str = "%H:%M";

/// Storage and wire format for calendar dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Length of every reservation, in minutes.
pub const SLOT_MINUTES: i64 = 60;

/// Returns the fixed slot duration.
#[must_use]
pub fn slot_duration() -> Duration {
    Duration::minutes(SLOT_MINUTES)
}

/// Parses an `HH:MM` time of day.
///
/// # Errors
///
/// Returns [`Error::InvalidTimeFormat`] if the text is not a valid time.
///
/// # Examples
///
/// ```
/// use tablebook::timeslot::parse_time;
///
/// assert!(parse_time("19:00").is_ok());
/// assert!(parse_time("25:00").is_err());
/// assert!(parse_time("seven").is_err());
/// ```
pub fn parse_time(value: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), TIME_FORMAT).map_err(|e| Error::InvalidTimeFormat {
        value: value.to_string(),
        reason: format!("expected HH:MM ({e})"),
    })
}

/// Parses a `YYYY-MM-DD` calendar date.
///
/// # Errors
///
/// Returns [`Error::Validation`] on the `data` field if the text is not a date.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|e| Error::Validation {
        field: "data".into(),
        message: format!("expected YYYY-MM-DD, got '{value}' ({e})"),
    })
}

/// Formats a time of day in canonical `HH:MM` form.
#[must_use]
pub fn format_time(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

/// Formats a date in canonical `YYYY-MM-DD` form.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Computes the end of a slot starting at `start`.
///
/// # Errors
///
/// Returns [`Error::InvalidTimeFormat`] when the slot would run past midnight.
///
/// # Examples
///
/// ```
/// use chrono::NaiveTime;
/// use tablebook::timeslot::compute_end;
///
/// let start = NaiveTime::from_hms_opt(19, 0, 0).unwrap();
/// assert_eq!(compute_end(start).unwrap(), NaiveTime::from_hms_opt(20, 0, 0).unwrap());
///
/// let late = NaiveTime::from_hms_opt(23, 30, 0).unwrap();
/// assert!(compute_end(late).is_err());
/// ```
pub fn compute_end(start: NaiveTime) -> Result<NaiveTime> {
    let (end, wrapped) = start.overflowing_add_signed(slot_duration());
    if wrapped != 0 {
        return Err(Error::InvalidTimeFormat {
            value: format_time(start),
            reason: "slot must end on the same day".into(),
        });
    }
    Ok(end)
}

/// Parses `start` and computes the end of its slot.
///
/// # Errors
///
/// Returns [`Error::InvalidTimeFormat`] if `start` is unparseable or the slot
/// crosses midnight.
pub fn compute_end_str(start: &str) -> Result<NaiveTime> {
    compute_end(parse_time(start)?)
}

/// Half-open interval overlap test.
///
/// Intervals that merely touch (one ends exactly when the other starts) do
/// not overlap.
///
/// # Examples
///
/// ```
/// use tablebook::timeslot::overlaps;
///
/// assert!(overlaps(19, 20, 19, 20));
/// assert!(overlaps(19, 21, 20, 22));
/// assert!(!overlaps(19, 20, 20, 21));
/// ```
pub fn overlaps<T: PartialOrd>(a_start: T, a_end: T, b_start: T, b_end: T) -> bool {
    a_start < b_end && b_start < a_end
}

/// Renders a slot for display: `"start - end"`, or `start` alone when the end
/// is unknown.
#[must_use]
pub fn format_range(start: &str, end: Option<&str>) -> String {
    match end {
        Some(end) => format!("{start} - {end}"),
        None => start.to_string(),
    }
}

/// The interval a reservation occupies on its day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeSlot {
    start: NaiveTime,
    end: NaiveTime,
}

impl TimeSlot {
    /// Builds the fixed-length slot that starts at `start`.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot would cross midnight.
    pub fn starting_at(start: NaiveTime) -> Result<Self> {
        Ok(Self {
            start,
            end: compute_end(start)?,
        })
    }

    /// Builds a slot from explicit stored bounds. Callers guarantee `start < end`.
    pub(crate) const fn from_bounds(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// Parses an `HH:MM` start time into a slot.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTimeFormat`] on bad input.
    pub fn parse(start: &str) -> Result<Self> {
        Self::starting_at(parse_time(start)?)
    }

    /// Slot start.
    #[must_use]
    pub const fn start(&self) -> NaiveTime {
        self.start
    }

    /// Slot end (exclusive).
    #[must_use]
    pub const fn end(&self) -> NaiveTime {
        self.end
    }

    /// Whether two slots share any instant.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        overlaps(self.start, self.end, other.start, other.end)
    }

    /// Whether `time` falls inside `[start, end)`.
    #[must_use]
    pub fn contains(&self, time: NaiveTime) -> bool {
        self.start <= time && time < self.end
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            format_range(&format_time(self.start), Some(&format_time(self.end)))
        )
    }
}
