//! Database CRUD operations for reservations.
//!
//! Every function takes a plain `&Connection` so it can run either on its
//! own or inside a transaction started with
//! [`Database::begin_transaction`](super::Database::begin_transaction).
//! Mutating statements are guarded on the status the caller expects, and
//! report `false` when no row matched.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension};

use crate::conflict::OccupiedSlot;
use crate::error::Result;
use crate::reservation::{NewReservation, Reservation, Status, TableNumber};
use crate::timeslot::{format_date, format_time, DATE_FORMAT, TIME_FORMAT};

use super::connection::Database;
use super::schema::{
    CONFIRM_RESERVATION, DELETE_BOOKED_RESERVATION, FINALIZE_RESERVATION, INSERT_RESERVATION,
    RESERVATION_COLUMNS,
};

/// Format of the stored confirmation time.
const CONFIRMATION_TIME_FORMAT: &str = "%H:%M:%S";

fn conversion_error<E>(column: usize, err: E) -> rusqlite::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    rusqlite::Error::FromSqlConversionFailure(column, Type::Text, Box::new(err))
}

/// Deserializes a reservation from a row selected with [`RESERVATION_COLUMNS`].
fn row_to_reservation(row: &rusqlite::Row<'_>) -> rusqlite::Result<Reservation> {
    let id: i64 = row.get(0)?;
    let date: String = row.get(1)?;
    let start: String = row.get(2)?;
    let end: Option<String> = row.get(3)?;
    let table: i64 = row.get(4)?;
    let party_size: i64 = row.get(5)?;
    let responsible: String = row.get(6)?;
    let status: String = row.get(7)?;
    let server: Option<String> = row.get(8)?;
    let confirmed_date: Option<String> = row.get(9)?;
    let confirmed_time: Option<String> = row.get(10)?;

    let date = NaiveDate::parse_from_str(&date, DATE_FORMAT).map_err(|e| conversion_error(1, e))?;
    // Legacy rows may hold free-form times; keep them readable.
    let parsed_start = NaiveTime::parse_from_str(&start, TIME_FORMAT).ok();
    let end = end.and_then(|e| NaiveTime::parse_from_str(&e, TIME_FORMAT).ok());
    let table = TableNumber::try_from(table).map_err(|e| conversion_error(4, e))?;
    let party_size = u32::try_from(party_size).map_err(|e| conversion_error(5, e))?;
    let status = status.parse::<Status>().map_err(|e| conversion_error(7, e))?;

    let confirmed_at = match (confirmed_date, confirmed_time) {
        (Some(d), Some(t)) => {
            let d = NaiveDate::parse_from_str(&d, DATE_FORMAT).map_err(|e| conversion_error(9, e))?;
            let t = NaiveTime::parse_from_str(&t, CONFIRMATION_TIME_FORMAT)
                .map_err(|e| conversion_error(10, e))?;
            Some(d.and_time(t))
        }
        _ => None,
    };

    Ok(Reservation {
        id,
        date,
        start: parsed_start,
        start_text: start,
        end,
        table,
        party_size,
        responsible,
        status,
        server,
        confirmed_at,
    })
}

fn query_reservations(
    conn: &Connection,
    filter: &str,
    params: impl rusqlite::Params,
) -> Result<Vec<Reservation>> {
    let sql =
        format!("SELECT {RESERVATION_COLUMNS} FROM reservas {filter} ORDER BY data, hora, id");
    let mut stmt = conn.prepare(&sql)?;
    let reservations = stmt
        .query_map(params, row_to_reservation)?
        .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;
    Ok(reservations)
}

impl Database {
    /// Inserts a new booked reservation and returns its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use chrono::NaiveDate;
    /// use tablebook::database::{Database, DatabaseConfig};
    /// use tablebook::timeslot::TimeSlot;
    /// use tablebook::{NewReservation, TableNumber};
    ///
    /// let db = Database::open(DatabaseConfig::new("/tmp/tablebook.db")).unwrap();
    /// let reservation = NewReservation::new(
    ///     NaiveDate::from_ymd_opt(2099, 3, 14).unwrap(),
    ///     TimeSlot::parse("19:00").unwrap(),
    ///     TableNumber::try_from(5).unwrap(),
    ///     4,
    ///     "Ana".to_string(),
    /// )
    /// .unwrap();
    /// let id = Database::insert_reservation(db.connection(), &reservation).unwrap();
    /// ```
    pub fn insert_reservation(conn: &Connection, reservation: &NewReservation) -> Result<i64> {
        let slot = reservation.slot();
        conn.execute(
            INSERT_RESERVATION,
            params![
                format_date(reservation.date()),
                format_time(slot.start()),
                format_time(slot.end()),
                reservation.table().value(),
                reservation.party_size(),
                reservation.responsible(),
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Retrieves a reservation by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the row cannot be decoded.
    pub fn get_reservation(conn: &Connection, id: i64) -> Result<Option<Reservation>> {
        let sql = format!("SELECT {RESERVATION_COLUMNS} FROM reservas WHERE id = ?");
        Ok(conn
            .query_row(&sql, [id], row_to_reservation)
            .optional()?)
    }

    /// Checks whether a booked reservation already claims this exact slot.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn booked_slot_exists(
        conn: &Connection,
        table: TableNumber,
        date: NaiveDate,
        start: NaiveTime,
    ) -> Result<bool> {
        let count: i64 = conn.query_row(
            r"SELECT COUNT(*) FROM reservas
              WHERE mesa = ? AND data = ? AND hora = ? AND status = 'reservada'",
            params![table.value(), format_date(date), format_time(start)],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// Returns the raw slots of confirmed reservations on a table and date.
    ///
    /// Times are returned exactly as stored so the conflict checker can
    /// decide what to do with malformed legacy values.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn confirmed_slots(
        conn: &Connection,
        table: TableNumber,
        date: &str,
        exclude: Option<i64>,
    ) -> Result<Vec<OccupiedSlot>> {
        let mut stmt = conn.prepare(
            r"SELECT id, hora, hora_fim FROM reservas
              WHERE mesa = ?1 AND data = ?2 AND status = 'confirmada'
                AND (?3 IS NULL OR id != ?3)
              ORDER BY hora, id",
        )?;
        let slots = stmt
            .query_map(params![table.value(), date, exclude], |row| {
                Ok(OccupiedSlot {
                    id: row.get(0)?,
                    start: row.get(1)?,
                    end: row.get(2)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;
        Ok(slots)
    }

    /// Marks a booked reservation as confirmed by `server` at `at`.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if a booked reservation was confirmed
    /// - `Ok(false)` if no booked reservation has this id
    pub fn mark_confirmed(
        conn: &Connection,
        id: i64,
        server: &str,
        at: NaiveDateTime,
    ) -> Result<bool> {
        let rows_affected = conn.execute(
            CONFIRM_RESERVATION,
            params![
                server,
                format_date(at.date()),
                at.time().format(CONFIRMATION_TIME_FORMAT).to_string(),
                id
            ],
        )?;
        Ok(rows_affected > 0)
    }

    /// Marks a confirmed reservation as finalized.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn mark_finalized(conn: &Connection, id: i64) -> Result<bool> {
        let rows_affected = conn.execute(FINALIZE_RESERVATION, [id])?;
        Ok(rows_affected > 0)
    }

    /// Deletes a reservation if it is still booked.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_booked(conn: &Connection, id: i64) -> Result<bool> {
        let rows_affected = conn.execute(DELETE_BOOKED_RESERVATION, [id])?;
        Ok(rows_affected > 0)
    }

    /// Lists all reservations ordered by date and start time.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be decoded.
    pub fn list_all_reservations(conn: &Connection) -> Result<Vec<Reservation>> {
        query_reservations(conn, "", [])
    }

    /// Lists reservations whose date lies in `[start, end]`.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be decoded.
    pub fn list_by_period(
        conn: &Connection,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Reservation>> {
        query_reservations(
            conn,
            "WHERE data BETWEEN ? AND ?",
            params![format_date(start), format_date(end)],
        )
    }

    /// Lists every reservation on a table regardless of status.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be decoded.
    pub fn list_by_table(conn: &Connection, table: TableNumber) -> Result<Vec<Reservation>> {
        query_reservations(conn, "WHERE mesa = ?", [table.value()])
    }

    /// Lists reservations confirmed by `server`.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be decoded.
    pub fn list_by_server(conn: &Connection, server: &str) -> Result<Vec<Reservation>> {
        query_reservations(conn, "WHERE garcom = ?", [server])
    }

    /// Lists reservations in the given status.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be decoded.
    pub fn list_by_status(conn: &Connection, status: Status) -> Result<Vec<Reservation>> {
        query_reservations(conn, "WHERE status = ?", [status.as_str()])
    }

    /// Lists reservations in the given status on one date.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be decoded.
    pub fn list_by_status_on(
        conn: &Connection,
        status: Status,
        date: NaiveDate,
    ) -> Result<Vec<Reservation>> {
        query_reservations(
            conn,
            "WHERE status = ? AND data = ?",
            params![status.as_str(), format_date(date)],
        )
    }
}
