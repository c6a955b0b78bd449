use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::db::queries::load_book;
use crate::errors::AppResult;
use crate::export::run_export;

/// Export the study data.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        table,
        force,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;
        init_db(&pool.conn)?;

        let book = load_book(&pool.conn)?;
        run_export(&book, format, *table, file, *force)?;
    }

    Ok(())
}
