//! Session controller: the start/stop lifecycle and the fan-out of a
//! finished session into the session log, the daily summary and both
//! target ledgers.

use crate::core::targets::TargetLedger;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::session::SessionRecord;
use crate::models::target::TargetScope;
use crate::utils::date::week_start;
use crate::utils::time::seconds_to_hours;
use chrono::{DateTime, Local, NaiveDate};

/// High-level business logic for the session lifecycle.
///
/// The controller has two states, persisted in the store so the
/// lifecycle spans CLI invocations: Idle (no `active_start` row) and
/// Active (a start timestamp is recorded).
pub struct SessionLogic;

impl SessionLogic {
    pub fn start(pool: &mut DbPool) -> AppResult<DateTime<Local>> {
        Self::start_at(pool, Local::now())
    }

    /// Begin a session at `now`. Starting while a session is already
    /// active is an invalid transition: the in-progress session is never
    /// silently discarded.
    pub fn start_at(pool: &mut DbPool, now: DateTime<Local>) -> AppResult<DateTime<Local>> {
        init_db(&pool.conn)?;

        let tx = pool.conn.transaction()?;

        if let Some(started) = queries::active_start(&tx)? {
            return Err(AppError::SessionActive(
                started.format("%Y-%m-%d %H:%M:%S").to_string(),
            ));
        }

        queries::set_active_start(&tx, now)?;
        tx.commit()?;

        Ok(now)
    }

    pub fn stop(pool: &mut DbPool, activity: Option<String>) -> AppResult<SessionRecord> {
        Self::stop_at(pool, Local::now(), activity)
    }

    /// End the active session at `now` and apply the whole fan-out as a
    /// single transaction: append to the log, bump the day's summary
    /// total, accumulate earned hours on the daily and weekly target
    /// ledgers, clear the active state. Stopping from Idle fails before
    /// any ledger is touched.
    pub fn stop_at(
        pool: &mut DbPool,
        now: DateTime<Local>,
        activity: Option<String>,
    ) -> AppResult<SessionRecord> {
        init_db(&pool.conn)?;

        let tx = pool.conn.transaction()?;

        let started = queries::active_start(&tx)?.ok_or(AppError::NoActiveSession)?;

        let seconds = (now - started).num_seconds().max(0);
        let date = now.date_naive();

        let record = SessionRecord {
            date,
            start: started.time(),
            end: now.time(),
            activity: activity.unwrap_or_default(),
            seconds,
        };

        let mut book = queries::load_book(&tx)?;

        book.logs.push(record.clone());
        book.summary.accumulate(date, seconds);

        let hours = seconds_to_hours(seconds);
        book.daily.accumulate(date, hours);
        book.weekly.accumulate(week_start(date), hours);

        queries::save_book(&tx, &book)?;
        queries::clear_active_start(&tx)?;
        tx.commit()?;

        Ok(record)
    }

    /// Set the target for a day or for the week containing `date`.
    pub fn set_target(
        pool: &mut DbPool,
        scope: TargetScope,
        date: NaiveDate,
        hours: f64,
    ) -> AppResult<NaiveDate> {
        if hours < 0.0 {
            return Err(AppError::InvalidHours(hours.to_string()));
        }

        init_db(&pool.conn)?;

        let tx = pool.conn.transaction()?;
        let mut book = queries::load_book(&tx)?;

        let key = match scope {
            TargetScope::Daily => date,
            TargetScope::Weekly => week_start(date),
        };

        let ledger: &mut TargetLedger = match scope {
            TargetScope::Daily => &mut book.daily,
            TargetScope::Weekly => &mut book.weekly,
        };
        ledger.set_target(key, hours);

        queries::save_book(&tx, &book)?;
        tx.commit()?;

        Ok(key)
    }

    /// Start timestamp of the in-progress session, if any.
    pub fn active(pool: &mut DbPool) -> AppResult<Option<DateTime<Local>>> {
        init_db(&pool.conn)?;
        queries::active_start(&pool.conn)
    }
}
