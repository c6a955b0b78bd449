use crate::core::StudyBook;
use crate::errors::{AppError, AppResult};
use crate::export::model::{table_headers, table_rows};
use crate::export::{notify_export_success, ExportTable};
use csv::Writer;
use std::path::Path;

/// Write one store table as CSV.
pub fn export_csv(book: &StudyBook, table: ExportTable, path: &Path) -> AppResult<()> {
    if table == ExportTable::All {
        return Err(AppError::Export(
            "CSV holds a single table: pick one with --table (logs, summary, daily, weekly)"
                .to_string(),
        ));
    }

    let mut wtr = Writer::from_path(path).map_err(|e| AppError::Export(e.to_string()))?;

    wtr.write_record(table_headers(table))
        .map_err(|e| AppError::Export(e.to_string()))?;

    for row in table_rows(book, table) {
        wtr.write_record(&row)
            .map_err(|e| AppError::Export(e.to_string()))?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
