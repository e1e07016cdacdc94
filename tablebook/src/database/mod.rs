//! Database layer for persistent storage of table reservations.
//!
//! This module provides a SQLite-based storage layer including connection
//! management, schema versioning, legacy upgrades, and CRUD operations.
//!
//! # Examples
//!
//! ```no_run
//! use tablebook::database::{Database, DatabaseConfig};
//! use tablebook::Status;
//!
//! let config = DatabaseConfig::new("/tmp/tablebook.db");
//! let db = Database::open(config).unwrap();
//!
//! for reservation in Database::list_by_status(db.connection(), Status::Booked).unwrap() {
//!     println!("{} {}", reservation.date_string(), reservation.time_range());
//! }
//! ```

mod config;
mod connection;
pub mod migrations;
mod operations;
mod schema;
mod transaction;

#[cfg(test)]
pub(crate) mod test_util;

pub use config::{default_data_dir, resolve_database_path, DatabaseConfig, DATABASE_FILE_NAME};
pub use connection::Database;
pub use schema::CURRENT_SCHEMA_VERSION;

pub use migrations::{check_schema_compatibility, get_schema_version, initialize_schema};
