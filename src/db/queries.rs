use crate::core::summary::SummaryLedger;
use crate::core::targets::TargetLedger;
use crate::core::StudyBook;
use crate::errors::{AppError, AppResult};
use crate::models::session::SessionRecord;
use crate::models::summary::{Change, DaySummary};
use crate::models::target::TargetEntry;
use crate::utils::formatting::parse_percent;
use crate::utils::time::{parse_change, parse_duration};
use chrono::{DateTime, Local, NaiveDate, NaiveTime};
use rusqlite::{params, Connection, OptionalExtension, Result, Row};

const ACTIVE_START_KEY: &str = "active_start";

fn bad_text(err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(err))
}

fn get_date(row: &Row, idx: usize) -> Result<NaiveDate> {
    let s: String = row.get(idx)?;
    NaiveDate::parse_from_str(&s, "%Y-%m-%d").map_err(|_| bad_text(AppError::InvalidDate(s)))
}

fn get_time(row: &Row, idx: usize) -> Result<NaiveTime> {
    let s: String = row.get(idx)?;
    NaiveTime::parse_from_str(&s, "%H:%M:%S")
        .map_err(|_| bad_text(AppError::InvalidDate(format!("bad time-of-day: {}", s))))
}

// The mappers read columns positionally; keep them aligned with the
// SELECT lists in load_book.
fn map_log_row(row: &Row) -> Result<SessionRecord> {
    // a malformed duration cell reads as 0:00:00
    let duration: String = row.get(4)?;
    Ok(SessionRecord {
        date: get_date(row, 0)?,
        start: get_time(row, 1)?,
        end: get_time(row, 2)?,
        activity: row.get(3)?,
        seconds: parse_duration(&duration),
    })
}

fn map_summary_row(row: &Row) -> Result<DaySummary> {
    let total: String = row.get(1)?;
    let change: String = row.get(2)?;
    Ok(DaySummary {
        date: get_date(row, 0)?,
        total_seconds: parse_duration(&total),
        change: if change.trim().is_empty() {
            None
        } else {
            Some(Change::from_signed(parse_change(&change)))
        },
    })
}

fn map_target_row(row: &Row) -> Result<TargetEntry> {
    let progress: String = row.get(3)?;
    Ok(TargetEntry {
        key: get_date(row, 0)?,
        target: row.get(1)?,
        earned: row.get(2)?,
        progress: parse_percent(&progress),
    })
}

fn load_rows<T, F>(conn: &Connection, sql: &str, map: F) -> AppResult<Vec<T>>
where
    F: Fn(&Row) -> Result<T>,
{
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map([], map)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Load the entire persisted state in insertion order.
pub fn load_book(conn: &Connection) -> AppResult<StudyBook> {
    let logs = load_rows(
        conn,
        "SELECT date, start_time, end_time, activity, duration FROM logs ORDER BY id ASC",
        map_log_row,
    )?;
    let summary = load_rows(
        conn,
        "SELECT date, total, change FROM summary ORDER BY id ASC",
        map_summary_row,
    )?;
    let daily = load_rows(
        conn,
        "SELECT date, target, earned, progress FROM daily_target ORDER BY id ASC",
        map_target_row,
    )?;
    let weekly = load_rows(
        conn,
        "SELECT week_start, target, earned, progress FROM weekly_target ORDER BY id ASC",
        map_target_row,
    )?;

    Ok(StudyBook {
        logs,
        summary: SummaryLedger::from_entries(summary),
        daily: TargetLedger::from_entries(daily),
        weekly: TargetLedger::from_entries(weekly),
    })
}

/// Write the full book back, replacing every table. The caller wraps
/// this in a transaction together with the state-row update, so readers
/// never observe a half-applied stop.
pub fn save_book(conn: &Connection, book: &StudyBook) -> AppResult<()> {
    conn.execute("DELETE FROM logs", [])?;
    conn.execute("DELETE FROM summary", [])?;
    conn.execute("DELETE FROM daily_target", [])?;
    conn.execute("DELETE FROM weekly_target", [])?;

    for rec in &book.logs {
        conn.execute(
            "INSERT INTO logs (date, start_time, end_time, activity, duration)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                rec.date_str(),
                rec.start_str(),
                rec.end_str(),
                rec.activity,
                rec.duration_str(),
            ],
        )?;
    }

    for e in book.summary.entries() {
        conn.execute(
            "INSERT INTO summary (date, total, change) VALUES (?1, ?2, ?3)",
            params![e.date_str(), e.total_str(), e.change_str()],
        )?;
    }

    for e in book.daily.entries() {
        conn.execute(
            "INSERT INTO daily_target (date, target, earned, progress)
             VALUES (?1, ?2, ?3, ?4)",
            params![e.key_str(), e.target, e.earned, e.progress_str()],
        )?;
    }

    for e in book.weekly.entries() {
        conn.execute(
            "INSERT INTO weekly_target (week_start, target, earned, progress)
             VALUES (?1, ?2, ?3, ?4)",
            params![e.key_str(), e.target, e.earned, e.progress_str()],
        )?;
    }

    Ok(())
}

/// Start timestamp of the in-progress session, if any.
pub fn active_start(conn: &Connection) -> AppResult<Option<DateTime<Local>>> {
    let value: Option<String> = conn
        .query_row(
            "SELECT value FROM state WHERE key = ?1",
            [ACTIVE_START_KEY],
            |row| row.get(0),
        )
        .optional()?;

    match value {
        Some(s) => {
            let dt = DateTime::parse_from_rfc3339(&s)
                .map_err(|_| AppError::InvalidDate(format!("bad session start: {}", s)))?;
            Ok(Some(dt.with_timezone(&Local)))
        }
        None => Ok(None),
    }
}

pub fn set_active_start(conn: &Connection, start: DateTime<Local>) -> AppResult<()> {
    conn.execute(
        "INSERT OR REPLACE INTO state (key, value) VALUES (?1, ?2)",
        params![ACTIVE_START_KEY, start.to_rfc3339()],
    )?;
    Ok(())
}

pub fn clear_active_start(conn: &Connection) -> AppResult<()> {
    conn.execute("DELETE FROM state WHERE key = ?1", [ACTIVE_START_KEY])?;
    Ok(())
}
