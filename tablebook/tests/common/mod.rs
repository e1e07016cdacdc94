//! Common test utilities for integration tests.

use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime};
use tablebook::operations::{ConfirmOptions, CreateOptions, Lifecycle};
use tablebook::{Database, DatabaseConfig, Result};
use tempfile::TempDir;

/// A store in a temporary data directory that lives as long as the fixture.
#[allow(dead_code)]
pub struct TestStore {
    dir: TempDir,
}

#[allow(dead_code)]
impl TestStore {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn db_path(&self) -> PathBuf {
        self.dir.path().join(tablebook::database::DATABASE_FILE_NAME)
    }

    /// Opens a fresh connection, as each request of the service does.
    pub fn open(&self) -> Database {
        Database::open(DatabaseConfig::new(self.db_path())).unwrap()
    }
}

/// A fixed clock well before every date used by the tests.
#[allow(dead_code)]
pub fn now() -> NaiveDateTime {
    date(2099, 1, 1).and_hms_opt(9, 0, 0).unwrap()
}

#[allow(dead_code)]
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Books `table` at `time` on `day` for two guests.
#[allow(dead_code)]
pub fn book(db: &mut Database, day: &str, time: &str, table: i64) -> Result<i64> {
    let outcome = Lifecycle::new(db)
        .create(CreateOptions::new(day, time, table, 2, "Ana").with_now(now()))?;
    Ok(outcome.id.unwrap())
}

#[allow(dead_code)]
pub fn confirm(db: &mut Database, id: i64, server: &str) -> Result<()> {
    Lifecycle::new(db)
        .confirm(ConfirmOptions::new(id, server).with_now(now()))
        .map(|_| ())
}
