use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::db::queries::load_book;
use crate::errors::{AppError, AppResult};
use crate::utils::date::period_bounds;
use crate::utils::table::{Column, Table};
use chrono::NaiveDate;

/// List recorded sessions, optionally restricted to a period.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { period } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        init_db(&pool.conn)?;

        let bounds: Option<(NaiveDate, NaiveDate)> = match period {
            Some(p) => Some(period_bounds(p).map_err(|_| AppError::InvalidPeriod(p.clone()))?),
            None => None,
        };

        let book = load_book(&pool.conn)?;

        let mut table = Table::new(vec![
            Column::new("Date", 10),
            Column::new("Start", 8),
            Column::new("End", 8),
            Column::new("Activity", 24),
            Column::new("Duration", 10),
        ]);

        let mut shown = 0;
        for rec in &book.logs {
            if let Some((from, to)) = bounds {
                if rec.date < from || rec.date > to {
                    continue;
                }
            }
            table.add_row(vec![
                rec.date_str(),
                rec.start_str(),
                rec.end_str(),
                rec.activity.clone(),
                rec.duration_str(),
            ]);
            shown += 1;
        }

        if shown == 0 {
            println!("No sessions recorded.");
        } else {
            println!("{}", table.render());
        }
    }

    Ok(())
}
