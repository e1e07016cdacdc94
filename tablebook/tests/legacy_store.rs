//! Opening stores written before schema versioning existed.

mod common;

use rusqlite::Connection;
use common::{book, confirm, date, TestStore};
use tablebook::operations::Lifecycle;
use tablebook::database::{get_schema_version, CURRENT_SCHEMA_VERSION};
use tablebook::{report, Database, DatabaseConfig, Error, Status, TableNumber};

fn write_legacy_store(store: &TestStore) {
    let conn = Connection::open(store.db_path()).unwrap();
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
            VALUES ('2099-05-02', '12:00', 4, 6, 'Bia');
        ",
    )
    .unwrap();
}

#[test]
fn test_legacy_store_is_upgraded_on_open() {
    let store = TestStore::new();
    write_legacy_store(&store);

    let db = store.open();
    assert_eq!(get_schema_version(db.connection()).unwrap(), CURRENT_SCHEMA_VERSION);

    let table = TableNumber::try_from(4).unwrap();
    let rows = report::by_table(db.connection(), table).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].hora, "19:00 - 20:00");
    assert_eq!(rows[0].status, Status::Confirmed);
    assert_eq!(rows[0].garcom.as_deref(), Some("Joao"));
    assert_eq!(rows[1].status, Status::Booked);
}

#[test]
fn test_legacy_confirmed_rows_still_occupy_their_slot() {
    let store = TestStore::new();
    write_legacy_store(&store);

    let err = book(&mut store.open(), "2099-05-01", "19:30", 4).unwrap_err();
    assert!(matches!(err, Error::SlotInUse { .. }));

    let id = book(&mut store.open(), "2099-05-01", "20:00", 4).unwrap();
    confirm(&mut store.open(), id, "Maria").unwrap();

    let db = store.open();
    let availability = report::availability(
        db.connection(),
        TableNumber::try_from(4).unwrap(),
        date(2099, 5, 1),
    )
    .unwrap();
    assert_eq!(
        availability.horarios_ocupados,
        vec!["19:00 - 20:00".to_string(), "20:00 - 21:00".to_string()]
    );
}

/// Adds rows whose `hora` was typed free-form by an older client.
fn write_free_form_times(store: &TestStore) {
    let conn = Connection::open(store.db_path()).unwrap();
    conn.execute_batch(
        r"
        INSERT INTO reservas (data, hora, mesa, pessoas, responsavel, status, garcom)
            VALUES ('2099-05-03', 'sete', 4, 3, 'Caio', 'confirmada', 'Joao');
        INSERT INTO reservas (data, hora, mesa, pessoas, responsavel)
            VALUES ('2099-05-03', 'xx', 8, 2, 'Duda');
        ",
    )
    .unwrap();
}

#[test]
fn test_free_form_times_stay_readable() {
    let store = TestStore::new();
    write_legacy_store(&store);
    write_free_form_times(&store);
    let db = store.open();
    let conn = db.connection();

    let pending = report::pending(conn).unwrap();
    assert_eq!(pending.len(), 2);
    assert_eq!(pending[1].hora, "xx");
    assert_eq!(pending[1].mesa, 8);

    let period = report::by_period(conn, date(2099, 5, 1), date(2099, 5, 31)).unwrap();
    assert_eq!(period.len(), 4);
    let hours: Vec<&str> = period.iter().map(|r| r.hora.as_str()).collect();
    assert_eq!(hours, ["19:00 - 20:00", "12:00 - 13:00", "sete", "xx"]);

    let joao = report::by_server(conn, "Joao").unwrap();
    assert_eq!(joao.len(), 2);
    assert_eq!(joao[1].hora, "sete");

    let table = report::by_table(conn, TableNumber::try_from(4).unwrap()).unwrap();
    assert_eq!(table.len(), 3);
    assert_eq!(table[2].responsavel, "Caio");

    let availability =
        report::availability(conn, TableNumber::try_from(4).unwrap(), date(2099, 5, 3)).unwrap();
    assert_eq!(availability.horarios_ocupados, vec!["sete".to_string()]);
}

#[test]
fn test_free_form_times_can_be_cancelled() {
    let store = TestStore::new();
    write_legacy_store(&store);
    write_free_form_times(&store);

    let mut db = store.open();
    let outcome = Lifecycle::new(&mut db).cancel(4).unwrap();
    assert_eq!(outcome.id, Some(4));
    assert_eq!(outcome.time_range, "xx");

    let pending = report::pending(db.connection()).unwrap();
    assert!(pending.iter().all(|r| r.id != 4));
}

#[test]
fn test_free_form_confirmed_time_blocks_the_whole_day() {
    let store = TestStore::new();
    write_legacy_store(&store);
    write_free_form_times(&store);

    let err = book(&mut store.open(), "2099-05-03", "15:00", 4).unwrap_err();
    assert!(matches!(err, Error::SlotInUse { table: 4, .. }));

    book(&mut store.open(), "2099-05-03", "15:00", 5).unwrap();
}

#[test]
fn test_read_only_open_refuses_legacy_store() {
    let store = TestStore::new();
    write_legacy_store(&store);

    let result = Database::open(DatabaseConfig::new(store.db_path()).read_only());
    assert!(matches!(result, Err(Error::UnsupportedSchemaVersion { found: 0, .. })));
}

#[test]
fn test_newer_store_is_rejected() {
    let store = TestStore::new();
    drop(store.open());

    let conn = Connection::open(store.db_path()).unwrap();
    conn.execute(
        "UPDATE metadata SET value = '99' WHERE key = 'schema_version'",
        [],
    )
    .unwrap();
    drop(conn);

    let result = Database::open(DatabaseConfig::new(store.db_path()));
    assert!(matches!(result, Err(Error::UnsupportedSchemaVersion { found: 99, .. })));
}
