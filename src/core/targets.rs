//! Target ledger: per-key (day or week start) target/earned/progress
//! rows with upsert-and-recompute accumulation.

use crate::models::target::TargetEntry;
use chrono::NaiveDate;
use std::collections::HashMap;

/// Keyed table of target rows. Insertion order is preserved for display
/// and export; the index enforces key uniqueness structurally, so no
/// linear scan is needed on upsert.
#[derive(Debug, Default)]
pub struct TargetLedger {
    entries: Vec<TargetEntry>,
    index: HashMap<NaiveDate, usize>,
}

/// progress = min(100, earned/target*100 rounded to one decimal).
/// A zero or unset target pins progress at 0. Also used by the
/// dashboard to render a live percent.
pub fn progress_percent(earned: f64, target: f64) -> f64 {
    if target <= 0.0 {
        return 0.0;
    }
    let pct = ((earned / target * 100.0) * 10.0).round() / 10.0;
    pct.min(100.0)
}

fn round2(hours: f64) -> f64 {
    (hours * 100.0).round() / 100.0
}

impl TargetLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from rows loaded off the store, in stored order.
    pub fn from_entries(entries: Vec<TargetEntry>) -> Self {
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.key, i))
            .collect();
        Self { entries, index }
    }

    /// Set (overwrite) the target for a key. Earned hours and the stored
    /// progress are left untouched; the percent is only recomputed by
    /// the next accumulate.
    pub fn set_target(&mut self, key: NaiveDate, hours: f64) {
        match self.index.get(&key) {
            Some(&i) => {
                self.entries[i].target = hours;
            }
            None => {
                self.push(TargetEntry {
                    key,
                    target: hours,
                    earned: 0.0,
                    progress: 0.0,
                });
            }
        }
    }

    /// Add earned hours to a key and recompute its progress. Creates the
    /// row with target 0 if the key was never referenced before.
    pub fn accumulate(&mut self, key: NaiveDate, hours: f64) {
        match self.index.get(&key) {
            Some(&i) => {
                let entry = &mut self.entries[i];
                entry.earned = round2(entry.earned + hours);
                entry.progress = progress_percent(entry.earned, entry.target);
            }
            None => {
                self.push(TargetEntry {
                    key,
                    target: 0.0,
                    earned: round2(hours),
                    progress: 0.0,
                });
            }
        }
    }

    pub fn lookup(&self, key: NaiveDate) -> Option<&TargetEntry> {
        self.index.get(&key).map(|&i| &self.entries[i])
    }

    pub fn entries(&self) -> impl Iterator<Item = &TargetEntry> {
        self.entries.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn push(&mut self, entry: TargetEntry) {
        self.index.insert(entry.key, self.entries.len());
        self.entries.push(entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, d).unwrap()
    }

    #[test]
    fn set_target_creates_row_with_zero_earned() {
        let mut ledger = TargetLedger::new();
        ledger.set_target(day(1), 4.0);

        let e = ledger.lookup(day(1)).unwrap();
        assert_eq!(e.target, 4.0);
        assert_eq!(e.earned, 0.0);
        assert_eq!(e.progress, 0.0);
    }

    #[test]
    fn accumulate_then_recompute_percent() {
        let mut ledger = TargetLedger::new();
        ledger.set_target(day(1), 4.0);
        ledger.accumulate(day(1), 2.0);

        let e = ledger.lookup(day(1)).unwrap();
        assert_eq!(e.earned, 2.0);
        assert_eq!(e.progress, 50.0);
        assert_eq!(e.progress_str(), "50%");
    }

    #[test]
    fn accumulate_without_target_keeps_zero_percent() {
        let mut ledger = TargetLedger::new();
        ledger.accumulate(day(2), 1.5);

        let e = ledger.lookup(day(2)).unwrap();
        assert_eq!(e.target, 0.0);
        assert_eq!(e.earned, 1.5);
        assert_eq!(e.progress, 0.0);
        assert_eq!(e.progress_str(), "0%");
    }

    #[test]
    fn set_target_preserves_earned_and_stored_percent() {
        let mut ledger = TargetLedger::new();
        ledger.accumulate(day(1), 2.0);
        ledger.set_target(day(1), 5.0);

        let e = ledger.lookup(day(1)).unwrap();
        assert_eq!(e.earned, 2.0);
        // the percent only moves on the next accumulate
        assert_eq!(e.progress, 0.0);

        ledger.accumulate(day(1), 0.5);
        assert_eq!(ledger.lookup(day(1)).unwrap().progress, 50.0);
    }

    #[test]
    fn earned_is_monotonic() {
        let mut ledger = TargetLedger::new();
        let mut last = 0.0;
        for _ in 0..10 {
            ledger.accumulate(day(3), 0.25);
            let now = ledger.lookup(day(3)).unwrap().earned;
            assert!(now >= last);
            last = now;
        }
        assert_eq!(last, 2.5);
    }

    #[test]
    fn progress_is_clamped_to_100() {
        let mut ledger = TargetLedger::new();
        ledger.set_target(day(1), 1.0);
        ledger.accumulate(day(1), 10.0);

        let e = ledger.lookup(day(1)).unwrap();
        assert_eq!(e.progress, 100.0);
        assert_eq!(e.progress_str(), "100%");
    }

    #[test]
    fn progress_rounds_to_one_decimal() {
        let mut ledger = TargetLedger::new();
        ledger.set_target(day(1), 3.0);
        ledger.accumulate(day(1), 1.0);

        let e = ledger.lookup(day(1)).unwrap();
        assert_eq!(e.progress, 33.3);
        assert_eq!(e.progress_str(), "33.3%");
    }

    #[test]
    fn entries_keep_insertion_order() {
        let mut ledger = TargetLedger::new();
        ledger.accumulate(day(5), 1.0);
        ledger.accumulate(day(2), 1.0);
        ledger.set_target(day(9), 4.0);

        let keys: Vec<NaiveDate> = ledger.entries().map(|e| e.key).collect();
        assert_eq!(keys, vec![day(5), day(2), day(9)]);
    }
}
