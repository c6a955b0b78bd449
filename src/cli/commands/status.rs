use crate::config::Config;
use crate::core::session::SessionLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::time::format_duration;
use chrono::Local;

/// Report whether a session is running and for how long.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut pool = DbPool::new(&cfg.database)?;

    match SessionLogic::active(&mut pool)? {
        Some(started) => {
            let elapsed = (Local::now() - started).num_seconds().max(0);
            info(format!(
                "Session active since {} (elapsed {})",
                started.format("%Y-%m-%d %H:%M:%S"),
                format_duration(elapsed)
            ));
        }
        None => info("No active session. Use 'start' to begin one."),
    }

    Ok(())
}
