use crate::config::Config;
use crate::core::session::SessionLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Begin a new study session.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut pool = DbPool::new(&cfg.database)?;

    let started = SessionLogic::start(&mut pool)?;
    success(format!("Session started at {}", started.format("%H:%M:%S")));

    Ok(())
}
