//! Writes probe results to a styled `.xlsx` workbook.
//!
//! Layout: one `Results` sheet, a bold frozen header row, one row per result
//! in input order, the status cell filled green or red, an autofilter over
//! the whole table and columns sized to their content.

use std::path::Path;

use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook, XlsxError};
use tracing::debug;

use pingsheet_common::models::{ProbeResult, Status};

use crate::error::ExportError;

const SHEET_NAME: &str = "Results";
pub const HEADERS: [&str; 3] = ["VM Name", "IP Address", "Status"];

const HEADER_FILL: u32 = 0x1F4E78;
const UP_FILL: u32 = 0xC6EFCE;
const UP_TEXT: u32 = 0x006100;
const DOWN_FILL: u32 = 0xFFC7CE;
const DOWN_TEXT: u32 = 0x9C0006;

struct Styles {
    header: Format,
    text: Format,
    up: Format,
    down: Format,
}

impl Styles {
    fn new() -> Self {
        let text = Format::new().set_border(FormatBorder::Thin);
        let status = text.clone().set_bold().set_align(FormatAlign::Center);

        Self {
            header: Format::new()
                .set_bold()
                .set_font_color(Color::White)
                .set_background_color(Color::RGB(HEADER_FILL))
                .set_border(FormatBorder::Thin),
            up: status
                .clone()
                .set_font_color(Color::RGB(UP_TEXT))
                .set_background_color(Color::RGB(UP_FILL)),
            down: status
                .set_font_color(Color::RGB(DOWN_TEXT))
                .set_background_color(Color::RGB(DOWN_FILL)),
            text,
        }
    }

    fn status(&self, status: Status) -> &Format {
        match status {
            Status::Up => &self.up,
            Status::Down => &self.down,
        }
    }
}

/// Saves `results` to `path`, replacing any existing file.
pub fn export_results(path: &Path, results: &[ProbeResult]) -> Result<(), ExportError> {
    let mut workbook: Workbook = build_workbook(results).map_err(|source| ExportError {
        path: path.to_path_buf(),
        source,
    })?;

    workbook.save(path).map_err(|source| ExportError {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(rows = results.len(), path = %path.display(), "results workbook saved");
    Ok(())
}

fn build_workbook(results: &[ProbeResult]) -> Result<Workbook, XlsxError> {
    let styles = Styles::new();
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    for (col, header) in (0u16..).zip(HEADERS) {
        sheet.write_string_with_format(0, col, header, &styles.header)?;
    }

    for (row, result) in (1u32..).zip(results) {
        let status = result.status();
        sheet.write_string_with_format(row, 0, &result.name, &styles.text)?;
        sheet.write_string_with_format(row, 1, &result.address, &styles.text)?;
        sheet.write_string_with_format(row, 2, status.to_string(), styles.status(status))?;
    }

    let last_row = u32::try_from(results.len()).unwrap_or(u32::MAX);
    let last_col = u16::try_from(HEADERS.len() - 1).unwrap_or(0);
    sheet.autofilter(0, 0, last_row, last_col)?;
    sheet.set_freeze_panes(1, 0)?;
    sheet.autofit();

    Ok(workbook)
}
