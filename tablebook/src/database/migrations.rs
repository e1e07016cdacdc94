//! Database schema management and migrations.
//!
//! This module handles database schema initialization, version checking,
//! and the in-place upgrade of unversioned legacy stores.

use rusqlite::{params, Connection};

use crate::error::{Error, Result};
use crate::timeslot::{compute_end_str, format_time};

use super::schema::{
    CREATE_METADATA_TABLE, CREATE_RESERVATIONS_TABLE, CREATE_SERVER_INDEX, CREATE_SLOT_INDEX,
    CURRENT_SCHEMA_VERSION, INSERT_SCHEMA_VERSION, LEGACY_ADDED_COLUMNS, SELECT_SCHEMA_VERSION,
};

/// Initializes the database schema.
///
/// This function creates all tables, indices, and metadata for a fresh
/// database.
///
/// # Errors
///
/// Returns an error if any SQL statement fails to execute.
///
/// # Examples
///
/// ```
/// use rusqlite::Connection;
/// use tablebook::database::migrations::{get_schema_version, initialize_schema};
///
/// let conn = Connection::open_in_memory().unwrap();
/// initialize_schema(&conn).unwrap();
/// assert_eq!(get_schema_version(&conn).unwrap(), 2);
/// ```
pub fn initialize_schema(conn: &Connection) -> Result<()> {
    conn.execute(CREATE_METADATA_TABLE, [])?;
    conn.execute(CREATE_RESERVATIONS_TABLE, [])?;
    conn.execute(CREATE_SLOT_INDEX, [])?;
    conn.execute(CREATE_SERVER_INDEX, [])?;
    conn.execute(INSERT_SCHEMA_VERSION, [CURRENT_SCHEMA_VERSION])?;
    Ok(())
}

/// Gets the current schema version from the database.
///
/// # Errors
///
/// Returns an error if the query fails for reasons other than a missing
/// metadata table or row.
///
/// # Returns
///
/// - `Ok(0)` if the metadata table doesn't exist or has no version
/// - `Ok(version)` if a version is found
pub fn get_schema_version(conn: &Connection) -> Result<i32> {
    match conn.query_row(SELECT_SCHEMA_VERSION, [], |row| {
        let value: String = row.get(0)?;
        value.parse::<i32>().map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
        })
    }) {
        Ok(version) => Ok(version),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(0),
        Err(e) => {
            if let rusqlite::Error::SqliteFailure(ref sqlite_err, _) = e {
                if sqlite_err.code == rusqlite::ErrorCode::Unknown {
                    // No metadata table yet
                    return Ok(0);
                }
            }
            Err(e.into())
        }
    }
}

/// Checks whether a table with the given name exists.
///
/// # Errors
///
/// Returns an error if the catalog query fails.
pub fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?",
        [name],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

/// Checks schema compatibility, initializing or migrating if needed.
///
/// - A database with no tables is initialized at the current version.
/// - A database holding an unversioned `reservas` table, or one stamped
///   with an older version, is migrated in place.
/// - A database stamped with a newer version is rejected.
///
/// # Errors
///
/// Returns [`Error::UnsupportedSchemaVersion`] for newer databases, or a
/// database error if initialization or migration fails.
pub fn check_schema_compatibility(conn: &Connection) -> Result<()> {
    let version = get_schema_version(conn)?;

    if version > CURRENT_SCHEMA_VERSION {
        return Err(Error::UnsupportedSchemaVersion {
            expected: CURRENT_SCHEMA_VERSION,
            found: version,
        });
    }

    if version == CURRENT_SCHEMA_VERSION {
        return Ok(());
    }

    if table_exists(conn, "reservas")? {
        log::info!(
            "upgrading reservation store from schema version {version} to {CURRENT_SCHEMA_VERSION}"
        );
        migrate_legacy(conn)
    } else {
        log::debug!("initializing empty reservation store");
        initialize_schema(conn)
    }
}

/// Verifies the schema version without modifying the database.
///
/// # Errors
///
/// Returns [`Error::UnsupportedSchemaVersion`] unless the stored version is
/// exactly the current one.
pub fn verify_schema_version(conn: &Connection) -> Result<()> {
    let version = get_schema_version(conn)?;
    if version == CURRENT_SCHEMA_VERSION {
        Ok(())
    } else {
        Err(Error::UnsupportedSchemaVersion {
            expected: CURRENT_SCHEMA_VERSION,
            found: version,
        })
    }
}

fn existing_columns(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn.prepare("PRAGMA table_info(reservas)")?;
    let columns = stmt
        .query_map([], |row| row.get::<_, String>(1))?
        .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;
    Ok(columns)
}

/// Upgrades a legacy `reservas` table to the current schema.
///
/// Missing columns are added and `hora_fim` is filled in from `hora`. Rows
/// whose start time cannot be parsed keep a `NULL` end; the conflict checker
/// treats them as occupying their table.
fn migrate_legacy(conn: &Connection) -> Result<()> {
    let tx = conn.unchecked_transaction()?;

    let columns = existing_columns(&tx)?;
    for (name, decl) in LEGACY_ADDED_COLUMNS {
        if !columns.iter().any(|c| c == name) {
            tx.execute_batch(&format!("ALTER TABLE reservas ADD COLUMN {name} {decl}"))?;
        }
    }

    let pending: Vec<(i64, String)> = {
        let mut stmt = tx.prepare("SELECT id, hora FROM reservas WHERE hora_fim IS NULL")?;
        let rows = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;
        rows
    };

    for (id, start) in pending {
        match compute_end_str(&start) {
            Ok(end) => {
                tx.execute(
                    "UPDATE reservas SET hora_fim = ? WHERE id = ?",
                    params![format_time(end), id],
                )?;
            }
            Err(e) => {
                log::warn!("reservation {id}: leaving end time empty during upgrade: {e}");
            }
        }
    }

    tx.execute(CREATE_METADATA_TABLE, [])?;
    tx.execute(CREATE_SLOT_INDEX, [])?;
    tx.execute(CREATE_SERVER_INDEX, [])?;
    tx.execute(INSERT_SCHEMA_VERSION, [CURRENT_SCHEMA_VERSION])?;

    tx.commit()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_connection() -> Connection {
        Connection::open_in_memory().unwrap()
    }

    fn create_legacy_table(conn: &Connection) {
        conn.execute_batch(
            r"
            CREATE TABLE reservas (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                data TEXT NOT NULL,
                hora TEXT NOT NULL,
                mesa INTEGER NOT NULL,
                pessoas INTEGER NOT NULL,
                responsavel TEXT NOT NULL,
                status TEXT DEFAULT 'reservada',
                garcom TEXT
            );
            INSERT INTO reservas (data, hora, mesa, pessoas, responsavel, status, garcom)
                VALUES ('2099-05-01', '19:00', 4, 2, 'Ana', 'confirmada', 'Joao');
            INSERT INTO reservas (data, hora, mesa, pessoas, responsavel)
                VALUES ('2099-05-01', 'sete horas', 4, 3, 'Bia');
            ",
        )
        .unwrap();
    }

    #[test]
    fn test_initialize_schema() {
        let conn = create_test_connection();
        initialize_schema(&conn).unwrap();

        assert_eq!(get_schema_version(&conn).unwrap(), CURRENT_SCHEMA_VERSION);

        let count: i32 = conn
            .query_row("SELECT COUNT(*) FROM reservas", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_get_schema_version_uninitialized() {
        let conn = create_test_connection();
        assert_eq!(get_schema_version(&conn).unwrap(), 0);
    }

    #[test]
    fn test_check_schema_compatibility_fresh_database() {
        let conn = create_test_connection();
        check_schema_compatibility(&conn).unwrap();
        assert_eq!(get_schema_version(&conn).unwrap(), CURRENT_SCHEMA_VERSION);

        // Idempotent on an up-to-date store
        check_schema_compatibility(&conn).unwrap();
    }

    #[test]
    fn test_check_schema_compatibility_newer_version() {
        let conn = create_test_connection();
        initialize_schema(&conn).unwrap();
        conn.execute(
            "UPDATE metadata SET value = '999' WHERE key = 'schema_version'",
            [],
        )
        .unwrap();

        let err = check_schema_compatibility(&conn).unwrap_err();
        assert!(matches!(
            err,
            Error::UnsupportedSchemaVersion {
                expected: CURRENT_SCHEMA_VERSION,
                found: 999
            }
        ));
    }

    #[test]
    fn test_legacy_table_is_migrated() {
        let conn = create_test_connection();
        create_legacy_table(&conn);

        check_schema_compatibility(&conn).unwrap();
        assert_eq!(get_schema_version(&conn).unwrap(), CURRENT_SCHEMA_VERSION);

        let columns = existing_columns(&conn).unwrap();
        for (name, _) in LEGACY_ADDED_COLUMNS {
            assert!(columns.iter().any(|c| c == name), "missing column {name}");
        }

        let end: Option<String> = conn
            .query_row("SELECT hora_fim FROM reservas WHERE responsavel = 'Ana'", [], |row| {
                row.get(0)
            })
            .unwrap();
        assert_eq!(end.as_deref(), Some("20:00"));

        // Unparseable start keeps an empty end
        let end: Option<String> = conn
            .query_row("SELECT hora_fim FROM reservas WHERE responsavel = 'Bia'", [], |row| {
                row.get(0)
            })
            .unwrap();
        assert!(end.is_none());
    }

    #[test]
    fn test_verify_schema_version() {
        let conn = create_test_connection();
        assert!(verify_schema_version(&conn).is_err());
        initialize_schema(&conn).unwrap();
        verify_schema_version(&conn).unwrap();
    }

    #[test]
    fn test_schema_creates_all_indices() {
        let conn = create_test_connection();
        initialize_schema(&conn).unwrap();

        let index_count: i32 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'index' AND name LIKE 'idx_reservas_%'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(index_count, 2);
    }
}
