// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::excel_date::{date_serial, decimal_hours_value, time_serial};
use crate::export::notify_export_success;
use crate::models::WorkLogRow;
use crate::models::work_log_row::get_headers;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// How a work-log column is written to the sheet.
#[derive(Clone, Copy)]
enum CellKind {
    Text,
    Integer,
    Date,
    Time,
    Hours,
}

/// Column kinds, in header order.
const KINDS: [CellKind; 7] = [
    CellKind::Text,
    CellKind::Integer,
    CellKind::Date,
    CellKind::Time,
    CellKind::Date,
    CellKind::Time,
    CellKind::Hours,
];

/// Export XLSX with a styled header, banded rows and auto column width.
pub(crate) fn export_xlsx(rows: &[WorkLogRow], path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Apontamentos").map_err(to_app_error)?;

    // ---------------------------
    // Header
    // ---------------------------
    let headers = get_headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x036F18))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_app_error)?;
    }

    worksheet.set_freeze_panes(1, 0).ok();

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xE8F5E9);
    let band2 = Color::RGB(0xFFFFFF);

    // ---------------------------
    // Rows
    // ---------------------------
    for (row_index, log) in rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band_color = if row_index % 2 == 0 { band1 } else { band2 };

        for (col, (value, kind)) in log.to_cells().iter().zip(KINDS).enumerate() {
            write_xlsx_cell(worksheet, row, col as u16, value, kind, band_color)?;
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_app_error)?;
    }

    workbook.save(path).map_err(to_app_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

/// Write one cell, typed by its column; unparsable values fall back to text.
fn write_xlsx_cell(
    worksheet: &mut rust_xlsxwriter::Worksheet,
    row: u32,
    col: u16,
    s: &str,
    kind: CellKind,
    bg: Color,
) -> AppResult<()> {
    let base = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    let typed = match kind {
        CellKind::Text => None,
        CellKind::Integer => s.parse::<f64>().ok().map(|n| (n, "0")),
        CellKind::Date => date_serial(s).map(|n| (n, "dd/mm/yyyy")),
        CellKind::Time => time_serial(s).map(|n| (n, "hh:mm")),
        CellKind::Hours => decimal_hours_value(s).map(|n| (n, "0.00")),
    };

    match typed {
        Some((number, num_format)) => {
            let fmt = base.set_num_format(num_format).set_align(FormatAlign::Right);
            worksheet
                .write_with_format(row, col, number, &fmt)
                .map_err(to_app_error)?;
        }
        None => {
            worksheet
                .write_with_format(row, col, s, &base)
                .map_err(to_app_error)?;
        }
    }

    Ok(())
}

fn to_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
