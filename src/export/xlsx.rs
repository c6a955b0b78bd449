use crate::core::StudyBook;
use crate::errors::{AppError, AppResult};
use crate::export::model::{table_headers, table_rows};
use crate::export::{notify_export_success, ExportTable};
use rust_xlsxwriter::{Color, Format, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Export the store as a spreadsheet: one styled worksheet per table,
/// named after the original workbook sheets (Logs, Summary, DailyTarget,
/// WeeklyTarget).
pub fn export_xlsx(book: &StudyBook, table: ExportTable, path: &Path) -> AppResult<()> {
    let mut workbook = Workbook::new();

    for t in table.single_tables() {
        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(t.sheet_name())
            .map_err(|e| AppError::Export(e.to_string()))?;
        write_sheet(worksheet, table_headers(t), &table_rows(book, t))?;
    }

    let path_str = path
        .to_str()
        .ok_or_else(|| AppError::Export(format!("invalid output path: {}", path.display())))?;
    workbook
        .save(path_str)
        .map_err(|e| AppError::Export(e.to_string()))?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn write_sheet(
    worksheet: &mut Worksheet,
    headers: &[&str],
    rows: &[Vec<String>],
) -> AppResult<()> {
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(|e| AppError::Export(e.to_string()))?;
    }

    worksheet.set_freeze_panes(1, 0).ok();

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    for (row_index, row) in rows.iter().enumerate() {
        let band = if row_index % 2 == 0 { band1 } else { band2 };
        let fmt = Format::new()
            .set_background_color(band)
            .set_pattern(FormatPattern::Solid)
            .set_border(FormatBorder::Thin);

        for (col, value) in row.iter().enumerate() {
            worksheet
                .write_with_format((row_index + 1) as u32, col as u16, value, &fmt)
                .map_err(|e| AppError::Export(e.to_string()))?;

            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(|e| AppError::Export(e.to_string()))?;
    }

    Ok(())
}
