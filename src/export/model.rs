//! Tabular views over the study book, shared by the CSV and XLSX
//! exporters. Column names match the original spreadsheet headers.

use crate::core::StudyBook;
use crate::export::ExportTable;

pub fn table_headers(table: ExportTable) -> &'static [&'static str] {
    match table {
        ExportTable::Logs => &["Date", "Start Time", "End Time", "Activity", "Duration"],
        ExportTable::Summary => &["Date", "Total Study Time (H:MM:SS)", "Change vs Previous Day"],
        ExportTable::Daily => &["Date", "Target Hours", "Earned Hours", "Progress %"],
        ExportTable::Weekly => &["Week Start", "Target Hours", "Earned Hours", "Progress %"],
        ExportTable::All => &[],
    }
}

pub fn table_rows(book: &StudyBook, table: ExportTable) -> Vec<Vec<String>> {
    match table {
        ExportTable::Logs => book
            .logs
            .iter()
            .map(|r| {
                vec![
                    r.date_str(),
                    r.start_str(),
                    r.end_str(),
                    r.activity.clone(),
                    r.duration_str(),
                ]
            })
            .collect(),
        ExportTable::Summary => book
            .summary
            .entries()
            .map(|e| vec![e.date_str(), e.total_str(), e.change_str()])
            .collect(),
        ExportTable::Daily => book
            .daily
            .entries()
            .map(|e| {
                vec![
                    e.key_str(),
                    e.target.to_string(),
                    e.earned.to_string(),
                    e.progress_str(),
                ]
            })
            .collect(),
        ExportTable::Weekly => book
            .weekly
            .entries()
            .map(|e| {
                vec![
                    e.key_str(),
                    e.target.to_string(),
                    e.earned.to_string(),
                    e.progress_str(),
                ]
            })
            .collect(),
        ExportTable::All => Vec::new(),
    }
}
