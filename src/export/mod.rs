mod csv;
mod fs_utils;
mod json;
mod model;
mod xlsx;

pub use model::{table_headers, table_rows};

use crate::core::StudyBook;
use crate::errors::AppResult;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for every export format.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
        }
    }
}

/// Which of the four store tables to export. `All` is rejected for CSV
/// (a CSV file holds a single table) and expands to one worksheet per
/// table for XLSX.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportTable {
    Logs,
    Summary,
    Daily,
    Weekly,
    All,
}

impl ExportTable {
    /// Worksheet name, matching the original spreadsheet layout.
    pub fn sheet_name(&self) -> &'static str {
        match self {
            ExportTable::Logs => "Logs",
            ExportTable::Summary => "Summary",
            ExportTable::Daily => "DailyTarget",
            ExportTable::Weekly => "WeeklyTarget",
            ExportTable::All => "All",
        }
    }

    pub fn single_tables(&self) -> Vec<ExportTable> {
        match self {
            ExportTable::All => vec![
                ExportTable::Logs,
                ExportTable::Summary,
                ExportTable::Daily,
                ExportTable::Weekly,
            ],
            t => vec![*t],
        }
    }
}

pub fn run_export(
    book: &StudyBook,
    format: &ExportFormat,
    table: ExportTable,
    file: &str,
    force: bool,
) -> AppResult<()> {
    let path = fs_utils::prepare_output_path(file, force)?;

    match format {
        ExportFormat::Csv => csv::export_csv(book, table, &path),
        ExportFormat::Json => json::export_json(book, table, &path),
        ExportFormat::Xlsx => xlsx::export_xlsx(book, table, &path),
    }
}
