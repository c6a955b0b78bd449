use crate::config::Config;
use crate::core::targets::{progress_percent, TargetLedger};
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::db::queries::load_book;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::colorize_change;
use crate::utils::date::{today, week_start};
use crate::utils::formatting::progress_bar;
use crate::utils::table::{Column, Table};
use chrono::NaiveDate;

/// Textual dashboard: today's and this week's target progress plus the
/// most recent summary rows.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;

    let book = load_book(&pool.conn)?;
    let today = today();

    header("Daily Progress");
    print_scope(&book.daily, "Date", today, cfg.bar_width);
    println!();

    header("Weekly Progress");
    print_scope(&book.weekly, "Week start", week_start(today), cfg.bar_width);
    println!();

    if !book.summary.is_empty() {
        header("Recent Days");
        let mut table = Table::new(vec![
            Column::new("Date", 10),
            Column::new("Total", 10),
            Column::new("Change", 10),
        ]);

        let skip = book.summary.len().saturating_sub(7);
        for e in book.summary.entries().skip(skip) {
            table.add_row(vec![
                e.date_str(),
                e.total_str(),
                colorize_change(&e.change_str()),
            ]);
        }
        println!("{}", table.render());
    }

    Ok(())
}

fn print_scope(ledger: &TargetLedger, key_label: &str, key: NaiveDate, bar_width: usize) {
    let (target, earned) = ledger
        .lookup(key)
        .map(|e| (e.target, e.earned))
        .unwrap_or((0.0, 0.0));

    // live percent, unlike the stored one which only moves on accumulate
    let percent = progress_percent(earned, target);

    println!("{}: {}", key_label, key);
    println!("Target: {} hrs", target);
    println!("Earned: {:.2} hrs", earned);
    println!("{}", progress_bar(percent, bar_width));
}
