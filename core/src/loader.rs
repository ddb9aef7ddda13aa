//! # Address Loader
//!
//! Reads `(name, address)` pairs out of a workbook.
//!
//! The first row of the used range is the header row. The address column and
//! the name column are either given explicitly or guessed from the header text
//! (see [`pingsheet_common::columns`]). Cells holding several addresses expand
//! into one [`Entry`] per address, all sharing the row's name.

use std::path::{Path, PathBuf};

use calamine::{Data, Reader, open_workbook_auto};
use tracing::{debug, warn};

use pingsheet_common::columns::{
    self, IP_CANDIDATES, NAME_CANDIDATES, choose_column, find_named_column, header_labels,
};
use pingsheet_common::models::Entry;

use crate::error::LoadError;

/// Where to read entries from and how to pick the columns.
#[derive(Debug, Clone, Default)]
pub struct SheetSource {
    pub path: PathBuf,
    /// Worksheet name. The first sheet is used when unset.
    pub sheet: Option<String>,
    /// Header of the name column, auto-detected when unset.
    pub name_column: Option<String>,
    /// Header of the address column, auto-detected when unset.
    pub ip_column: Option<String>,
}

impl SheetSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }
}

/// Loads every entry of the selected sheet in row order.
///
/// An empty sheet is not an error and yields no entries.
pub fn load_entries(source: &SheetSource) -> Result<Vec<Entry>, LoadError> {
    if !source.path.exists() {
        return Err(LoadError::NotFound(source.path.clone()));
    }

    let rows: Vec<Vec<String>> = read_rows(&source.path, source.sheet.as_deref())?;
    entries_from_rows(
        &rows,
        source.name_column.as_deref(),
        source.ip_column.as_deref(),
    )
}

fn read_rows(path: &Path, sheet: Option<&str>) -> Result<Vec<Vec<String>>, LoadError> {
    let workbook_error = |source: calamine::Error| LoadError::Workbook {
        path: path.to_path_buf(),
        source,
    };

    let mut workbook = open_workbook_auto(path).map_err(workbook_error)?;
    let sheet_names: Vec<String> = workbook.sheet_names();

    let selected: String = match sheet {
        Some(wanted) => sheet_names
            .iter()
            .find(|name| name.as_str() == wanted)
            .cloned()
            .ok_or_else(|| LoadError::SheetNotFound {
                name: wanted.to_string(),
                available: sheet_names.clone(),
            })?,
        None => match sheet_names.first() {
            Some(first) => first.clone(),
            None => return Ok(Vec::new()),
        },
    };

    debug!(sheet = %selected, path = %path.display(), "reading worksheet");
    let range = workbook.worksheet_range(&selected).map_err(workbook_error)?;

    Ok(range
        .rows()
        .map(|row| row.iter().map(cell_text).collect())
        .collect())
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        other => other.to_string().trim().to_string(),
    }
}

/// Turns already-read rows into entries. The first row holds the headers.
pub fn entries_from_rows(
    rows: &[Vec<String>],
    name_column: Option<&str>,
    ip_column: Option<&str>,
) -> Result<Vec<Entry>, LoadError> {
    let Some((header_row, body)) = rows.split_first() else {
        return Ok(Vec::new());
    };
    let headers: Vec<String> = header_labels(header_row);

    let ip_idx: usize = match ip_column {
        Some(wanted) => find_named_column(&headers, wanted),
        None => choose_column(&headers, IP_CANDIDATES),
    }
    .ok_or_else(|| LoadError::NoAddressColumn {
        headers: headers.clone(),
    })?;

    let name_idx: Option<usize> = match name_column {
        Some(wanted) => {
            let found = find_named_column(&headers, wanted);
            if found.is_none() {
                warn!("Name column '{wanted}' not found, hosts will be listed without names");
            }
            found
        }
        None => choose_column(&headers, NAME_CANDIDATES),
    };

    debug!(
        ip_column = %headers[ip_idx],
        name_column = ?name_idx.map(|idx| &headers[idx]),
        "resolved columns"
    );

    let mut entries: Vec<Entry> = Vec::new();
    for row in body {
        let Some(cell) = row.get(ip_idx) else {
            continue;
        };
        let name: &str = name_idx
            .and_then(|idx| row.get(idx))
            .map(|s| s.trim())
            .unwrap_or_default();

        for address in columns::split_addresses(cell) {
            entries.push(Entry::new(name, address));
        }
    }

    Ok(entries)
}
