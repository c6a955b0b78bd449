use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::SessionLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Stop the active session and fan it out to the ledgers.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stop { activity } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        // --activity wins; otherwise fall back to the configured default.
        // An empty default means no label.
        let label = activity.clone().or_else(|| {
            if cfg.default_activity.is_empty() {
                None
            } else {
                Some(cfg.default_activity.clone())
            }
        });

        let record = SessionLogic::stop(&mut pool, label)?;
        success(format!(
            "Session saved! Duration: {}",
            record.duration_str()
        ));
    }

    Ok(())
}
