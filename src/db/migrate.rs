//! Lazy schema creation.
//!
//! Each table is created independently with IF NOT EXISTS, so a store
//! produced by an older release gains the newer tables on the next run
//! without touching the ones it already has.

use rusqlite::{Connection, Result};

fn ensure_logs_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS logs (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            date       TEXT NOT NULL,
            start_time TEXT NOT NULL,
            end_time   TEXT NOT NULL,
            activity   TEXT NOT NULL DEFAULT '',
            duration   TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_logs_date ON logs(date);
        "#,
    )?;
    Ok(())
}

fn ensure_summary_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS summary (
            id     INTEGER PRIMARY KEY AUTOINCREMENT,
            date   TEXT NOT NULL UNIQUE,
            total  TEXT NOT NULL,
            change TEXT NOT NULL DEFAULT ''
        );
        "#,
    )?;
    Ok(())
}

fn ensure_daily_target_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS daily_target (
            id       INTEGER PRIMARY KEY AUTOINCREMENT,
            date     TEXT NOT NULL UNIQUE,
            target   REAL NOT NULL DEFAULT 0,
            earned   REAL NOT NULL DEFAULT 0,
            progress TEXT NOT NULL DEFAULT '0%'
        );
        "#,
    )?;
    Ok(())
}

fn ensure_weekly_target_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS weekly_target (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            week_start TEXT NOT NULL UNIQUE,
            target     REAL NOT NULL DEFAULT 0,
            earned     REAL NOT NULL DEFAULT 0,
            progress   TEXT NOT NULL DEFAULT '0%'
        );
        "#,
    )?;
    Ok(())
}

fn ensure_state_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS state (
            key   TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Public entry point: bring the schema up to date.
///
/// Invoked by db::init_db() and at the start of every mutating command.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_logs_table(conn)?;
    ensure_summary_table(conn)?;
    ensure_daily_target_table(conn)?;
    ensure_weekly_target_table(conn)?;
    ensure_state_table(conn)?;
    Ok(())
}
