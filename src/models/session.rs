use crate::utils::time::format_duration;
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// One completed start/stop study interval.
/// Created once per stop event and never rewritten; the session log is
/// append-only.
#[derive(Debug, Clone, Serialize)]
pub struct SessionRecord {
    pub date: NaiveDate,  // ⇔ logs.date (TEXT "YYYY-MM-DD")
    pub start: NaiveTime, // ⇔ logs.start_time (TEXT "HH:MM:SS")
    pub end: NaiveTime,   // ⇔ logs.end_time (TEXT "HH:MM:SS")
    pub activity: String, // ⇔ logs.activity (TEXT, may be empty)
    pub seconds: i64,     // ⇔ logs.duration (TEXT "H:MM:SS")
}

impl SessionRecord {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn start_str(&self) -> String {
        self.start.format("%H:%M:%S").to_string()
    }

    pub fn end_str(&self) -> String {
        self.end.format("%H:%M:%S").to_string()
    }

    pub fn duration_str(&self) -> String {
        format_duration(self.seconds)
    }
}
