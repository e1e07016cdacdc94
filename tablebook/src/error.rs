//! Error types for the tablebook library.
//!
//! This module provides the error hierarchy for every operation in the
//! library, using `thiserror` for ergonomic error handling. Business-rule
//! failures (bad input, conflicting slots, illegal transitions) are kept apart
//! from store failures so that callers can map them to different responses.

use std::path::PathBuf;

use thiserror::Error;

use crate::reservation::Status;

/// Result type alias for operations that may fail with a tablebook error.
///
/// # Examples
///
/// ```
/// use tablebook::{Error, Result};
///
/// fn example_operation() -> Result<i64> {
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the tablebook library.
#[derive(Debug, Error)]
pub enum Error {
    /// A validation error occurred (table out of range, bad party size, bad date).
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A time of day could not be parsed or produces an invalid slot.
    #[error("invalid time '{value}': {reason}")]
    InvalidTimeFormat {
        /// The offending input.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The requested slot is not strictly in the future.
    #[error("cannot book {date} {time}: the slot is in the past")]
    PastDateTime {
        /// The requested date.
        date: String,
        /// The requested start time.
        time: String,
    },

    /// Another booked reservation already claims the exact same slot.
    #[error("table {table} is already booked on {date} at {time}")]
    DuplicateSlot {
        /// The table number.
        table: u8,
        /// The slot date.
        date: String,
        /// The slot start time.
        time: String,
    },

    /// A confirmed reservation overlaps the requested slot.
    #[error("table {table} is in use on {date} at {time}")]
    SlotInUse {
        /// The table number.
        table: u8,
        /// The slot date.
        date: String,
        /// The slot start time.
        time: String,
    },

    /// The requested resource was not found.
    #[error("not found: {resource}")]
    NotFound {
        /// The resource that was not found.
        resource: String,
    },

    /// The reservation has left the booked state and can no longer be cancelled.
    #[error("reservation {id} is already {status} and cannot be cancelled")]
    AlreadyConfirmed {
        /// The reservation id.
        id: i64,
        /// Its current status.
        status: Status,
    },

    /// A required field was empty or absent.
    #[error("field '{field}' is required")]
    MissingField {
        /// The missing field name.
        field: String,
    },

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// An unsupported schema version was encountered.
    #[error("unsupported schema version: expected {expected}, found {found}")]
    UnsupportedSchemaVersion {
        /// The expected schema version.
        expected: i32,
        /// The schema version found in the database.
        found: i32,
    },
}

impl From<crate::reservation::ValidationError> for Error {
    fn from(err: crate::reservation::ValidationError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}

impl Error {
    /// Check if error indicates a missing reservation.
    ///
    /// # Examples
    ///
    /// ```
    /// use tablebook::Error;
    ///
    /// let err = Error::NotFound { resource: "reservation 7".into() };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if error was caused by the caller rather than the store.
    ///
    /// Client errors carry a message fit for the person who made the request;
    /// everything else is an internal failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use tablebook::Error;
    ///
    /// let err = Error::MissingField { field: "garcom".into() };
    /// assert!(err.is_client_error());
    ///
    /// let err = Error::Io(std::io::Error::other("disk gone"));
    /// assert!(!err.is_client_error());
    /// ```
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::Validation { .. }
                | Self::InvalidTimeFormat { .. }
                | Self::PastDateTime { .. }
                | Self::DuplicateSlot { .. }
                | Self::SlotInUse { .. }
                | Self::NotFound { .. }
                | Self::AlreadyConfirmed { .. }
                | Self::MissingField { .. }
        )
    }

    /// Check if the store lock could not be acquired within the busy timeout.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        matches!(
            self,
            Self::Database(rusqlite::Error::SqliteFailure(e, _))
                if matches!(
                    e.code,
                    rusqlite::ErrorCode::DatabaseBusy | rusqlite::ErrorCode::DatabaseLocked
                )
        )
    }
}
