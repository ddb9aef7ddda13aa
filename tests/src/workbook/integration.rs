use calamine::{Data, Reader, open_workbook_auto};
use rust_xlsxwriter::Workbook;

use pingsheet_common::models::{Entry, ProbeResult};
use pingsheet_core::error::LoadError;
use pingsheet_core::export;
use pingsheet_core::loader::{self, SheetSource};

use crate::utils::{write_sheet, write_sheets};

#[test]
fn loads_entries_with_detected_columns() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("ip.xlsx");
    write_sheet(
        &path,
        "Hosts",
        &[
            &["Server", "IP Address", "Notes"],
            &["Host1", "10.0.0.1, 10.0.0.2;10.0.0.3", "triple homed"],
            &["spare", "", "no address yet"],
            &["", "192.168.0.7", ""],
        ],
    )?;

    let entries = loader::load_entries(&SheetSource::new(&path))?;

    assert_eq!(
        entries,
        vec![
            Entry::new("Host1", "10.0.0.1"),
            Entry::new("Host1", "10.0.0.2"),
            Entry::new("Host1", "10.0.0.3"),
            Entry::new("", "192.168.0.7"),
        ]
    );
    Ok(())
}

#[test]
fn named_sheet_is_selected_over_first() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("lab.xlsx");
    let first: &[&[&str]] = &[&["Name", "IP"], &["first", "10.1.0.1"]];
    let second: &[&[&str]] = &[&["VM", "IPv4"], &["second", "10.2.0.1"]];
    write_sheets(&path, &[("Rack 1", first), ("Rack 2", second)])?;

    let default_sheet = loader::load_entries(&SheetSource::new(&path))?;
    assert_eq!(default_sheet, vec![Entry::new("first", "10.1.0.1")]);

    let source = SheetSource {
        sheet: Some(String::from("Rack 2")),
        ..SheetSource::new(&path)
    };
    let named_sheet = loader::load_entries(&source)?;
    assert_eq!(named_sheet, vec![Entry::new("second", "10.2.0.1")]);
    Ok(())
}

#[test]
fn unknown_sheet_lists_available_sheets() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("lab.xlsx");
    write_sheet(&path, "Hosts", &[&["Name", "IP"], &["a", "10.0.0.1"]])?;

    let source = SheetSource {
        sheet: Some(String::from("Servers")),
        ..SheetSource::new(&path)
    };

    match loader::load_entries(&source) {
        Err(LoadError::SheetNotFound { name, available }) => {
            assert_eq!(name, "Servers");
            assert_eq!(available, vec!["Hosts"]);
        }
        other => panic!("expected SheetNotFound, got {other:?}"),
    }
    Ok(())
}

#[test]
fn numeric_cells_are_read_as_text() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("numbers.xlsx");

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 0, "VM")?;
    sheet.write_string(0, 1, "IP")?;
    sheet.write_number(1, 0, 101)?;
    sheet.write_string(1, 1, "172.16.0.1")?;
    workbook.save(&path)?;

    let entries = loader::load_entries(&SheetSource::new(&path))?;
    assert_eq!(entries, vec![Entry::new("101", "172.16.0.1")]);
    Ok(())
}

#[test]
fn garbage_file_is_a_workbook_error() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("broken.xlsx");
    std::fs::write(&path, b"definitely not a zip archive")?;

    let err = loader::load_entries(&SheetSource::new(&path)).unwrap_err();
    assert!(matches!(err, LoadError::Workbook { .. }), "got {err}");
    Ok(())
}

#[test]
fn exported_results_read_back_in_order() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("ip_results.xlsx");
    let results = vec![
        ProbeResult::new(&Entry::new("web", "10.0.0.1"), true),
        ProbeResult::new(&Entry::new("db", "10.0.0.2"), false),
        ProbeResult::new(&Entry::new("", "10.0.0.3"), true),
    ];

    export::export_results(&path, &results)?;

    let mut workbook = open_workbook_auto(&path)?;
    assert_eq!(workbook.sheet_names(), vec!["Results"]);
    let range = workbook.worksheet_range("Results")?;
    let rows: Vec<Vec<String>> = range
        .rows()
        .map(|row| {
            row.iter()
                .map(|cell| match cell {
                    Data::Empty => String::new(),
                    other => other.to_string(),
                })
                .collect()
        })
        .collect();

    assert_eq!(
        rows,
        vec![
            vec!["VM Name", "IP Address", "Status"],
            vec!["web", "10.0.0.1", "UP"],
            vec!["db", "10.0.0.2", "DOWN"],
            vec!["", "10.0.0.3", "UP"],
        ]
    );
    Ok(())
}
