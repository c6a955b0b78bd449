//! End-to-end scenarios driven through the library API with injected
//! timestamps, so durations are exact.

use chrono::{DateTime, Local, NaiveDate, TimeZone};
use studytracker::core::session::SessionLogic;
use studytracker::db::pool::DbPool;
use studytracker::db::queries::load_book;
use studytracker::models::target::TargetScope;

mod common;
use common::setup_test_db;

fn at(date: (i32, u32, u32), h: u32, m: u32, s: u32) -> DateTime<Local> {
    Local
        .with_ymd_and_hms(date.0, date.1, date.2, h, m, s)
        .unwrap()
}

fn day(date: (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap()
}

// 2025-09-01 is a Monday, so the weekly key for that whole week is the
// date itself.
const MON: (i32, u32, u32) = (2025, 9, 1);
const TUE: (i32, u32, u32) = (2025, 9, 2);

fn run_session(
    pool: &mut DbPool,
    date: (i32, u32, u32),
    start: (u32, u32, u32),
    end: (u32, u32, u32),
    label: &str,
) {
    SessionLogic::start_at(pool, at(date, start.0, start.1, start.2)).unwrap();
    SessionLogic::stop_at(
        pool,
        at(date, end.0, end.1, end.2),
        Some(label.to_string()),
    )
    .unwrap();
}

#[test]
fn scenario_single_session_lands_in_log_and_summary() {
    let db = setup_test_db("scn_single");
    let mut pool = DbPool::new(&db).unwrap();

    run_session(&mut pool, MON, (9, 0, 0), (10, 30, 0), "Math");

    let book = load_book(&pool.conn).unwrap();
    assert_eq!(book.logs.len(), 1);

    let rec = &book.logs[0];
    assert_eq!(rec.activity, "Math");
    assert_eq!(rec.duration_str(), "1:30:00");
    assert_eq!(rec.start_str(), "09:00:00");
    assert_eq!(rec.end_str(), "10:30:00");

    let sum = book.summary.lookup(day(MON)).unwrap();
    assert_eq!(sum.total_str(), "1:30:00");
    assert!(sum.change.is_none());
}

#[test]
fn scenario_two_sessions_same_day_accumulate() {
    let db = setup_test_db("scn_same_day");
    let mut pool = DbPool::new(&db).unwrap();

    run_session(&mut pool, MON, (9, 0, 0), (10, 0, 0), "Math");
    run_session(&mut pool, MON, (14, 0, 0), (14, 45, 0), "Physics");

    let book = load_book(&pool.conn).unwrap();
    assert_eq!(book.logs.len(), 2);
    assert_eq!(
        book.summary.lookup(day(MON)).unwrap().total_str(),
        "1:45:00"
    );
}

#[test]
fn scenario_target_then_session_computes_progress() {
    let db = setup_test_db("scn_target");
    let mut pool = DbPool::new(&db).unwrap();

    SessionLogic::set_target(&mut pool, TargetScope::Daily, day(MON), 4.0).unwrap();
    run_session(&mut pool, MON, (9, 0, 0), (11, 0, 0), "Math");

    let book = load_book(&pool.conn).unwrap();
    let e = book.daily.lookup(day(MON)).unwrap();
    assert_eq!(e.target, 4.0);
    assert_eq!(e.earned, 2.0);
    assert_eq!(e.progress_str(), "50%");
}

#[test]
fn scenario_session_without_target_reads_zero_percent() {
    let db = setup_test_db("scn_no_target");
    let mut pool = DbPool::new(&db).unwrap();

    run_session(&mut pool, MON, (9, 0, 0), (10, 30, 0), "");

    let book = load_book(&pool.conn).unwrap();
    let e = book.daily.lookup(day(MON)).unwrap();
    assert_eq!(e.target, 0.0);
    assert_eq!(e.earned, 1.5);
    assert_eq!(e.progress_str(), "0%");
}

#[test]
fn scenario_change_vs_previous_day() {
    let db = setup_test_db("scn_change");
    let mut pool = DbPool::new(&db).unwrap();

    run_session(&mut pool, MON, (9, 0, 0), (11, 0, 0), "Math"); // 2:00:00
    run_session(&mut pool, TUE, (9, 0, 0), (12, 30, 0), "Math"); // 3:30:00

    let book = load_book(&pool.conn).unwrap();
    assert_eq!(
        book.summary.lookup(day(TUE)).unwrap().change_str(),
        "+1:30:00"
    );
}

#[test]
fn scenario_weekly_ledger_pools_the_whole_week() {
    let db = setup_test_db("scn_weekly");
    let mut pool = DbPool::new(&db).unwrap();

    SessionLogic::set_target(&mut pool, TargetScope::Weekly, day(TUE), 10.0).unwrap();
    run_session(&mut pool, MON, (9, 0, 0), (11, 0, 0), "Math");
    run_session(&mut pool, TUE, (9, 0, 0), (12, 0, 0), "Math");

    let book = load_book(&pool.conn).unwrap();
    // both days pool under Monday's key
    let e = book.weekly.lookup(day(MON)).unwrap();
    assert_eq!(e.target, 10.0);
    assert_eq!(e.earned, 5.0);
    assert_eq!(e.progress_str(), "50%");
    assert!(book.weekly.lookup(day(TUE)).is_none());
}

#[test]
fn scenario_set_target_after_sessions_keeps_earned() {
    let db = setup_test_db("scn_target_after");
    let mut pool = DbPool::new(&db).unwrap();

    run_session(&mut pool, MON, (9, 0, 0), (11, 0, 0), "Math");
    SessionLogic::set_target(&mut pool, TargetScope::Daily, day(MON), 5.0).unwrap();

    let book = load_book(&pool.conn).unwrap();
    let e = book.daily.lookup(day(MON)).unwrap();
    assert_eq!(e.earned, 2.0);
    assert_eq!(e.target, 5.0);
    // stored percent is only refreshed by the next accumulate
    assert_eq!(e.progress_str(), "0%");
}

#[test]
fn stop_from_idle_leaves_store_untouched() {
    let db = setup_test_db("scn_idle_stop");
    let mut pool = DbPool::new(&db).unwrap();

    let err = SessionLogic::stop_at(&mut pool, at(MON, 10, 0, 0), None);
    assert!(err.is_err());

    let book = load_book(&pool.conn).unwrap();
    assert!(book.logs.is_empty());
    assert!(book.summary.is_empty());
}

#[test]
fn state_survives_a_new_connection() {
    let db = setup_test_db("scn_reopen");

    {
        let mut pool = DbPool::new(&db).unwrap();
        SessionLogic::start_at(&mut pool, at(MON, 9, 0, 0)).unwrap();
    }

    // a fresh process picks the session up and stops it
    let mut pool = DbPool::new(&db).unwrap();
    let rec = SessionLogic::stop_at(&mut pool, at(MON, 9, 30, 0), None).unwrap();
    assert_eq!(rec.duration_str(), "0:30:00");
    assert_eq!(rec.activity, "");
}
