pub mod backup;
pub mod session;
pub mod summary;
pub mod targets;

use crate::models::session::SessionRecord;
use summary::SummaryLedger;
use targets::TargetLedger;

/// The whole persisted state, loaded as one snapshot: the append-only
/// session log, the daily summary ledger and both target ledgers.
///
/// Every mutating command loads the book, applies its change in memory
/// and writes the full book back inside one transaction; there is no
/// cell-level update path.
#[derive(Debug, Default)]
pub struct StudyBook {
    pub logs: Vec<SessionRecord>,
    pub summary: SummaryLedger,
    pub daily: TargetLedger,
    pub weekly: TargetLedger,
}
