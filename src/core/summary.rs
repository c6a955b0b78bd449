//! Daily summary ledger: running per-day totals with a signed change
//! versus the preceding row.

use crate::models::summary::{Change, DaySummary};
use chrono::NaiveDate;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct SummaryLedger {
    entries: Vec<DaySummary>,
    index: HashMap<NaiveDate, usize>,
}

impl SummaryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<DaySummary>) -> Self {
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.date, i))
            .collect();
        Self { entries, index }
    }

    /// Add a session's seconds to the date's total. The change column is
    /// recomputed against the row immediately preceding this one in
    /// ledger order; the first row carries no change.
    pub fn accumulate(&mut self, date: NaiveDate, seconds: i64) {
        match self.index.get(&date) {
            Some(&i) => {
                self.entries[i].total_seconds += seconds;
                if i > 0 {
                    let prev = self.entries[i - 1].total_seconds;
                    let diff = self.entries[i].total_seconds - prev;
                    self.entries[i].change = Some(Change::from_signed(diff));
                }
            }
            None => {
                let change = self
                    .entries
                    .last()
                    .map(|prev| Change::from_signed(seconds - prev.total_seconds));
                self.index.insert(date, self.entries.len());
                self.entries.push(DaySummary {
                    date,
                    total_seconds: seconds,
                    change,
                });
            }
        }
    }

    pub fn lookup(&self, date: NaiveDate) -> Option<&DaySummary> {
        self.index.get(&date).map(|&i| &self.entries[i])
    }

    /// All rows in ledger (insertion) order.
    pub fn entries(&self) -> impl Iterator<Item = &DaySummary> {
        self.entries.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, d).unwrap()
    }

    #[test]
    fn first_row_has_no_change() {
        let mut ledger = SummaryLedger::new();
        ledger.accumulate(day(1), 5400);

        let e = ledger.lookup(day(1)).unwrap();
        assert_eq!(e.total_str(), "1:30:00");
        assert!(e.change.is_none());
        assert_eq!(e.change_str(), "");
    }

    #[test]
    fn same_day_sessions_accumulate() {
        let mut ledger = SummaryLedger::new();
        ledger.accumulate(day(1), 3600);
        ledger.accumulate(day(1), 2700);

        let e = ledger.lookup(day(1)).unwrap();
        assert_eq!(e.total_str(), "1:45:00");
    }

    #[test]
    fn change_vs_previous_row_is_signed() {
        let mut ledger = SummaryLedger::new();
        ledger.accumulate(day(1), 7200); // 2:00:00
        ledger.accumulate(day(2), 12600); // 3:30:00

        let e = ledger.lookup(day(2)).unwrap();
        assert_eq!(e.change_str(), "+1:30:00");

        ledger.accumulate(day(3), 3600);
        assert_eq!(ledger.lookup(day(3)).unwrap().change_str(), "-2:30:00");
    }

    #[test]
    fn change_compares_to_previous_row_not_previous_date() {
        let mut ledger = SummaryLedger::new();
        ledger.accumulate(day(1), 7200);
        // nothing logged on the 2nd; the 5th compares against the 1st
        ledger.accumulate(day(5), 3600);

        assert_eq!(ledger.lookup(day(5)).unwrap().change_str(), "-1:00:00");
    }

    #[test]
    fn change_updates_when_existing_row_grows() {
        let mut ledger = SummaryLedger::new();
        ledger.accumulate(day(1), 7200);
        ledger.accumulate(day(2), 3600);
        assert_eq!(ledger.lookup(day(2)).unwrap().change_str(), "-1:00:00");

        ledger.accumulate(day(2), 7200);
        assert_eq!(ledger.lookup(day(2)).unwrap().change_str(), "+1:00:00");
    }

    #[test]
    fn equal_totals_read_as_plus_zero() {
        let mut ledger = SummaryLedger::new();
        ledger.accumulate(day(1), 3600);
        ledger.accumulate(day(2), 3600);

        assert_eq!(ledger.lookup(day(2)).unwrap().change_str(), "+0:00:00");
    }
}
