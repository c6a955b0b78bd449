use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::db::queries::load_book;
use crate::errors::AppResult;
use crate::utils::colors::colorize_change;
use crate::utils::table::{Column, Table};

/// Print the daily summary ledger as a table.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;

    let book = load_book(&pool.conn)?;

    if book.summary.is_empty() {
        println!("No study time recorded yet.");
        return Ok(());
    }

    let mut table = Table::new(vec![
        Column::new("Date", 10),
        Column::new("Total Study Time", 16),
        // last column so the ANSI escapes don't skew the padding
        Column::new("Vs Previous Day", 15),
    ]);

    for e in book.summary.entries() {
        table.add_row(vec![
            e.date_str(),
            e.total_str(),
            colorize_change(&e.change_str()),
        ]);
    }

    println!("{}", table.render());
    Ok(())
}
