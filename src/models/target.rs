use crate::utils::formatting::format_percent;
use chrono::NaiveDate;
use clap::ValueEnum;
use serde::Serialize;

/// Which target ledger an operation addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TargetScope {
    /// Per-day target, keyed by calendar date
    Daily,
    /// Per-week target, keyed by the Monday starting the week
    Weekly,
}

impl TargetScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetScope::Daily => "daily",
            TargetScope::Weekly => "weekly",
        }
    }
}

/// One row of a target ledger: user-set target hours, accumulated
/// earned hours and the derived progress percentage.
///
/// `target` and `earned` evolve independently: setting a target never
/// resets earned, and accumulating never requires a target to exist.
#[derive(Debug, Clone, Serialize)]
pub struct TargetEntry {
    pub key: NaiveDate, // date (daily) or week start (weekly); unique
    pub target: f64,    // target hours, 0 until the user sets one
    pub earned: f64,    // accumulated hours, rounded to 2 decimals
    pub progress: f64,  // derived percent in [0, 100]
}

impl TargetEntry {
    pub fn key_str(&self) -> String {
        self.key.format("%Y-%m-%d").to_string()
    }

    pub fn progress_str(&self) -> String {
        format_percent(self.progress)
    }
}
