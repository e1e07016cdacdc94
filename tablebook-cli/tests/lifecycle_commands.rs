//! Integration tests for `create`, `confirm`, `finalize`, and `cancel`.

mod common;

use common::{TestEnv, DAY};
use predicates::prelude::*;

#[test]
fn test_create_prints_id_and_books() {
    let env = TestEnv::new();

    env.command()
        .args(["create", "--date", DAY, "--time", "19:00"])
        .args(["--table", "5", "--party-size", "4", "--responsible", "Ana"])
        .assert()
        .success()
        .stdout("1\n")
        .stderr(predicate::str::contains("19:00 - 20:00"));

    let pending = env.json(&["pending"]);
    let rows = pending.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["mesa"], 5);
    assert_eq!(rows[0]["status"], "reservada");
}

#[test]
fn test_create_accepts_day_first_dates() {
    let env = TestEnv::new();

    env.command()
        .args(["create", "--date", "14-03-2099", "--time", "12:00"])
        .args(["--table", "2", "--party-size", "2", "--responsible", "Rui"])
        .assert()
        .success();

    let rows = env.json(&["report", "period", "--start", DAY, "--end", DAY]);
    assert_eq!(rows[0]["data"], DAY);
}

#[test]
fn test_create_quiet_prints_only_id() {
    let env = TestEnv::new();

    env.command()
        .arg("--quiet")
        .args(["create", "--date", DAY, "--time", "19:00"])
        .args(["--table", "5", "--party-size", "4", "--responsible", "Ana"])
        .assert()
        .success()
        .stdout("1\n")
        .stderr("");
}

#[test]
fn test_create_rejections_exit_one() {
    let env = TestEnv::new();

    env.command()
        .args(["create", "--date", DAY, "--time", "19:00"])
        .args(["--table", "21", "--party-size", "4", "--responsible", "Ana"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("mesa"));

    env.command()
        .args(["create", "--date", "2001-01-01", "--time", "19:00"])
        .args(["--table", "5", "--party-size", "4", "--responsible", "Ana"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("past"));

    env.command()
        .args(["create", "--date", DAY, "--time", "7pm"])
        .args(["--table", "5", "--party-size", "4", "--responsible", "Ana"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid time"));
}

#[test]
fn test_create_duplicate_slot() {
    let env = TestEnv::new();
    env.create(5, "19:00");

    env.command()
        .args(["create", "--date", DAY, "--time", "19:00"])
        .args(["--table", "5", "--party-size", "2", "--responsible", "Bia"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already booked"));
}

#[test]
fn test_create_dry_run_books_nothing() {
    let env = TestEnv::new();

    env.command()
        .args(["create", "--date", DAY, "--time", "19:00"])
        .args(["--table", "5", "--party-size", "4", "--responsible", "Ana"])
        .arg("--dry-run")
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("Dry run"))
        .stderr(predicate::str::contains("Book table 5"));

    let pending = env.json(&["pending"]);
    assert_eq!(pending.as_array().unwrap().len(), 0);
}

#[test]
fn test_confirm_blocks_overlapping_slot() {
    let env = TestEnv::new();
    let first = env.create(5, "19:00");
    let overlapping = env.create(5, "19:30");
    let adjacent = env.create(5, "20:00");

    env.confirm(first, "Carlos");

    env.command()
        .args(["confirm", &overlapping.to_string(), "--server", "Duda"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("in use"));

    env.confirm(adjacent, "Duda");

    let availability = env.json(&["availability", "5", "--date", DAY]);
    assert_eq!(
        availability["horarios_ocupados"],
        serde_json::json!(["19:00 - 20:00", "20:00 - 21:00"])
    );
}

#[test]
fn test_confirm_requires_server_name() {
    let env = TestEnv::new();
    let id = env.create(5, "19:00");

    env.command()
        .args(["confirm", &id.to_string(), "--server", "  "])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("garcom"));
}

#[test]
fn test_confirm_twice_is_not_found() {
    let env = TestEnv::new();
    let id = env.create(5, "19:00");
    env.confirm(id, "Carlos");

    env.command()
        .args(["confirm", &id.to_string(), "--server", "Carlos"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_cancel_booked_and_confirmed() {
    let env = TestEnv::new();
    let booked = env.create(3, "12:00");
    let confirmed = env.create(4, "12:00");
    env.confirm(confirmed, "Carlos");

    env.command()
        .args(["cancel", &booked.to_string()])
        .assert()
        .success()
        .stderr(predicate::str::contains("cancelled"));

    env.command()
        .args(["cancel", &confirmed.to_string()])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("cannot be cancelled"));

    env.command()
        .args(["cancel", &booked.to_string()])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not found"));

    let rows = env.json(&["report", "table", "4"]);
    assert_eq!(rows.as_array().unwrap().len(), 1);
    let rows = env.json(&["report", "table", "3"]);
    assert_eq!(rows.as_array().unwrap().len(), 0);
}

#[test]
fn test_cancel_dry_run_keeps_reservation() {
    let env = TestEnv::new();
    let id = env.create(3, "12:00");

    env.command()
        .args(["cancel", &id.to_string(), "--dry-run"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Cancel reservation"));

    let pending = env.json(&["pending"]);
    assert_eq!(pending.as_array().unwrap().len(), 1);
}

#[test]
fn test_finalize_only_confirmed() {
    let env = TestEnv::new();
    let id = env.create(5, "19:00");

    env.command()
        .args(["finalize", &id.to_string()])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not found"));

    env.confirm(id, "Carlos");

    env.command()
        .args(["finalize", &id.to_string()])
        .assert()
        .success()
        .stderr(predicate::str::contains("finalized"));

    let rows = env.json(&["report", "server", "Carlos"]);
    assert_eq!(rows[0]["status"], "finalizada");

    let availability = env.json(&["availability", "5", "--date", DAY]);
    assert_eq!(availability["horarios_ocupados"], serde_json::json!([]));
}
