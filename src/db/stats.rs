use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

/// Print store statistics for `db --info`.
pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) SESSIONS / DAYS LOGGED
    //
    let sessions: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM logs", [], |row| row.get(0))?;
    let days: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM summary", [], |row| row.get(0))?;

    println!(
        "{}• Sessions:{} {}{}{} across {}{}{} day(s)",
        CYAN, RESET, GREEN, sessions, RESET, GREEN, days, RESET
    );

    //
    // 3) DATE RANGE
    //
    let first_date: Option<String> = pool
        .conn
        .query_row("SELECT MIN(date) FROM logs", [], |row| row.get(0))
        .optional()?
        .flatten();

    let last_date: Option<String> = pool
        .conn
        .query_row("SELECT MAX(date) FROM logs", [], |row| row.get(0))
        .optional()?
        .flatten();

    match (first_date, last_date) {
        (Some(f), Some(l)) => {
            println!("{}• Range:{} {} → {}", CYAN, RESET, f, l);
        }
        _ => {
            println!("{}• Range:{} {}no sessions yet{}", CYAN, RESET, GREY, RESET);
        }
    }

    //
    // 4) ACTIVE SESSION
    //
    let active: Option<String> = pool
        .conn
        .query_row(
            "SELECT value FROM state WHERE key = 'active_start'",
            [],
            |row| row.get(0),
        )
        .optional()?;

    match active {
        Some(start) => println!("{}• Active session since:{} {}", CYAN, RESET, start),
        None => println!("{}• Active session:{} {}none{}", CYAN, RESET, GREY, RESET),
    }

    println!();
    Ok(())
}
