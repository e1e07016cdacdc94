//! Database schema definitions and SQL constants.
//!
//! This module contains all SQL table definitions, indices, and constants
//! for the reservation store.

/// Current schema version for the database.
///
/// Version 1 is the unversioned `reservas` table without an end time or
/// confirmation timestamp. Version 2 adds both plus the metadata table.
pub const CURRENT_SCHEMA_VERSION: i32 = 2;

/// SQL statement to create the metadata table.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// SQL statement to create the reservations table.
///
/// `AUTOINCREMENT` guarantees ids are never reused after a cancellation.
pub const CREATE_RESERVATIONS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS reservas (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        data TEXT NOT NULL,
        hora TEXT NOT NULL,
        hora_fim TEXT,
        mesa INTEGER NOT NULL CHECK (mesa BETWEEN 1 AND 20),
        pessoas INTEGER NOT NULL CHECK (pessoas >= 1),
        responsavel TEXT NOT NULL,
        status TEXT NOT NULL DEFAULT 'reservada',
        garcom TEXT,
        data_confirmacao TEXT,
        hora_confirmacao TEXT
    )";

/// Index backing the conflict and duplicate lookups.
pub const CREATE_SLOT_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_reservas_slot ON reservas(mesa, data, status)";

/// Index backing the per-server report.
pub const CREATE_SERVER_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_reservas_garcom ON reservas(garcom)";

/// SQL statement to select the schema version from the metadata table.
pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

/// SQL statement to insert or update the schema version in the metadata table.
pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";

/// Columns added to legacy `reservas` tables, with their declarations.
pub const LEGACY_ADDED_COLUMNS: &[(&str, &str)] = &[
    ("hora_fim", "TEXT"),
    ("garcom", "TEXT"),
    ("data_confirmacao", "TEXT"),
    ("hora_confirmacao", "TEXT"),
];

/// Column list shared by every reservation query, in decode order.
pub const RESERVATION_COLUMNS: &str = "id, data, hora, hora_fim, mesa, pessoas, responsavel, \
     status, garcom, data_confirmacao, hora_confirmacao";

/// SQL statement to insert a new booked reservation.
pub const INSERT_RESERVATION: &str = r"
    INSERT INTO reservas (data, hora, hora_fim, mesa, pessoas, responsavel, status)
    VALUES (?, ?, ?, ?, ?, ?, 'reservada')
";

/// Confirms a reservation that is still booked.
pub const CONFIRM_RESERVATION: &str = r"
    UPDATE reservas
    SET status = 'confirmada', garcom = ?, data_confirmacao = ?, hora_confirmacao = ?
    WHERE id = ? AND status = 'reservada'
";

/// Finalizes a reservation that is confirmed.
pub const FINALIZE_RESERVATION: &str = r"
    UPDATE reservas
    SET status = 'finalizada'
    WHERE id = ? AND status = 'confirmada'
";

/// Deletes a reservation that is still booked.
pub const DELETE_BOOKED_RESERVATION: &str = r"
    DELETE FROM reservas
    WHERE id = ? AND status = 'reservada'
";
