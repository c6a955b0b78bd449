use crate::utils::time::{format_change, format_duration};
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// Signed difference versus the previous summary row, kept as a
/// magnitude plus an explicit sign so the display format (`+H:MM:SS` /
/// `-H:MM:SS`) is lossless. Zero is rendered with a `+`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Change {
    pub negative: bool,
    pub seconds: i64,
}

impl Change {
    pub fn from_signed(diff: i64) -> Self {
        Self {
            negative: diff < 0,
            seconds: diff.abs(),
        }
    }

    pub fn signed_seconds(&self) -> i64 {
        if self.negative {
            -self.seconds
        } else {
            self.seconds
        }
    }
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_change(self.signed_seconds()))
    }
}

/// Running per-day total with the change versus the row that precedes
/// it in ledger order (not necessarily the previous calendar day: gaps
/// in logging compare against the last logged day).
#[derive(Debug, Clone, Serialize)]
pub struct DaySummary {
    pub date: NaiveDate,         // ⇔ summary.date (TEXT, unique)
    pub total_seconds: i64,      // ⇔ summary.total (TEXT "H:MM:SS")
    pub change: Option<Change>,  // ⇔ summary.change (TEXT "±H:MM:SS" or '')
}

impl DaySummary {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn total_str(&self) -> String {
        format_duration(self.total_seconds)
    }

    /// Change column as displayed: empty for the first row.
    pub fn change_str(&self) -> String {
        self.change.map(|c| c.to_string()).unwrap_or_default()
    }
}
