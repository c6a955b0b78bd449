use predicates::str::contains;

mod common;
use common::{init_db, record_session, setup_test_db, st};

#[test]
fn test_init_creates_store() {
    let db_path = setup_test_db("init");

    st()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_stop_without_start_fails_and_mutates_nothing() {
    let db_path = setup_test_db("stop_idle");
    init_db(&db_path);

    st()
        .args(["--db", &db_path, "--test", "stop"])
        .assert()
        .failure()
        .stderr(contains("No active session"));

    st()
        .args(["--db", &db_path, "--test", "log"])
        .assert()
        .success()
        .stdout(contains("No sessions recorded."));
}

#[test]
fn test_double_start_is_rejected() {
    let db_path = setup_test_db("double_start");
    init_db(&db_path);

    st()
        .args(["--db", &db_path, "--test", "start"])
        .assert()
        .success()
        .stdout(contains("Session started"));

    st()
        .args(["--db", &db_path, "--test", "start"])
        .assert()
        .failure()
        .stderr(contains("already running"));

    // the original session is still stoppable
    st()
        .args(["--db", &db_path, "--test", "stop"])
        .assert()
        .success()
        .stdout(contains("Session saved!"));
}

#[test]
fn test_start_stop_records_session() {
    let db_path = setup_test_db("start_stop");
    init_db(&db_path);
    record_session(&db_path, "Math");

    st()
        .args(["--db", &db_path, "--test", "log"])
        .assert()
        .success()
        .stdout(contains("Math"));

    st()
        .args(["--db", &db_path, "--test", "summary"])
        .assert()
        .success()
        .stdout(contains("Total Study Time"));
}

#[test]
fn test_status_reflects_lifecycle() {
    let db_path = setup_test_db("status");
    init_db(&db_path);

    st()
        .args(["--db", &db_path, "--test", "status"])
        .assert()
        .success()
        .stdout(contains("No active session"));

    st()
        .args(["--db", &db_path, "--test", "start"])
        .assert()
        .success();

    st()
        .args(["--db", &db_path, "--test", "status"])
        .assert()
        .success()
        .stdout(contains("Session active since"));
}

#[test]
fn test_set_daily_target_shows_on_dashboard() {
    let db_path = setup_test_db("target_dash");
    init_db(&db_path);

    st()
        .args(["--db", &db_path, "--test", "target", "daily", "4"])
        .assert()
        .success()
        .stdout(contains("Daily target"));

    st()
        .args(["--db", &db_path, "--test", "dashboard"])
        .assert()
        .success()
        .stdout(contains("Daily Progress"))
        .stdout(contains("Target: 4 hrs"));
}

#[test]
fn test_weekly_target_uses_week_start_key() {
    let db_path = setup_test_db("target_week");
    init_db(&db_path);

    // 2025-09-04 is a Thursday; the week key is Monday 2025-09-01
    st()
        .args([
            "--db",
            &db_path,
            "--test",
            "target",
            "weekly",
            "10",
            "--date",
            "2025-09-04",
        ])
        .assert()
        .success()
        .stdout(contains("2025-09-01"));
}

#[test]
fn test_negative_target_is_rejected() {
    let db_path = setup_test_db("target_neg");
    init_db(&db_path);

    st()
        .args([
            "--db", &db_path, "--test", "target", "daily", "--", "-2",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid hours"));
}

#[test]
fn test_log_period_filter() {
    let db_path = setup_test_db("log_period");
    init_db(&db_path);
    record_session(&db_path, "History");

    // sessions are recorded "today", so a 1970 filter hides them
    st()
        .args(["--db", &db_path, "--test", "log", "--period", "1970"])
        .assert()
        .success()
        .stdout(contains("No sessions recorded."));

    st()
        .args(["--db", &db_path, "--test", "log", "--period", "bogus"])
        .assert()
        .failure()
        .stderr(contains("Invalid period"));
}

#[test]
fn test_db_info_runs() {
    let db_path = setup_test_db("db_info");
    init_db(&db_path);
    record_session(&db_path, "Physics");

    st()
        .args(["--db", &db_path, "--test", "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Sessions:"));
}
