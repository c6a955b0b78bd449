use crate::core::StudyBook;
use crate::errors::{AppError, AppResult};
use crate::export::{notify_export_success, ExportTable};
use crate::models::session::SessionRecord;
use crate::models::summary::DaySummary;
use crate::models::target::TargetEntry;
use serde::Serialize;
use std::fs;
use std::path::Path;

#[derive(Serialize)]
struct BookJson<'a> {
    logs: &'a [SessionRecord],
    summary: Vec<&'a DaySummary>,
    daily_target: Vec<&'a TargetEntry>,
    weekly_target: Vec<&'a TargetEntry>,
}

/// Write the selected table (or the whole book) as pretty JSON.
pub fn export_json(book: &StudyBook, table: ExportTable, path: &Path) -> AppResult<()> {
    let json = match table {
        ExportTable::Logs => serde_json::to_string_pretty(&book.logs),
        ExportTable::Summary => {
            serde_json::to_string_pretty(&book.summary.entries().collect::<Vec<_>>())
        }
        ExportTable::Daily => {
            serde_json::to_string_pretty(&book.daily.entries().collect::<Vec<_>>())
        }
        ExportTable::Weekly => {
            serde_json::to_string_pretty(&book.weekly.entries().collect::<Vec<_>>())
        }
        ExportTable::All => serde_json::to_string_pretty(&BookJson {
            logs: &book.logs,
            summary: book.summary.entries().collect(),
            daily_target: book.daily.entries().collect(),
            weekly_target: book.weekly.entries().collect(),
        }),
    }
    .map_err(|e| AppError::Export(e.to_string()))?;

    fs::write(path, json)?;

    notify_export_success("JSON", path);
    Ok(())
}
