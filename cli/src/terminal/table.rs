//! Column-aligned console table of probe results.

use colored::*;
use unicode_width::UnicodeWidthStr;

use pingsheet_common::models::{ProbeResult, Status};
use pingsheet_core::export::HEADERS;

use crate::terminal::{colors, print};

const GUTTER: &str = "  ";

struct Layout {
    name_width: usize,
    address_width: usize,
    status_width: usize,
}

impl Layout {
    fn for_results(results: &[ProbeResult]) -> Self {
        let [name_header, address_header, status_header] = HEADERS;

        Self {
            name_width: widest(name_header, results.iter().map(|r| r.name.as_str())),
            address_width: widest(address_header, results.iter().map(|r| r.address.as_str())),
            status_width: status_header.width(),
        }
    }

    fn line(&self, name: &str, address: &str, status: &str) -> String {
        format!(
            "{}{GUTTER}{}{GUTTER}{}",
            pad(name, self.name_width),
            pad(address, self.address_width),
            status
        )
    }

    fn rule(&self) -> String {
        self.line(
            &"-".repeat(self.name_width),
            &"-".repeat(self.address_width),
            &"-".repeat(self.status_width),
        )
    }
}

fn widest<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> usize {
    values.map(UnicodeWidthStr::width).fold(header.width(), usize::max)
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(fill))
}

/// Renders the table: header, rule, then one line per result.
///
/// `status_cell` formats the last column. Alignment is computed on the plain
/// labels, so it may add escape codes freely.
pub fn render<F>(results: &[ProbeResult], status_cell: F) -> Vec<String>
where
    F: Fn(Status) -> String,
{
    let layout = Layout::for_results(results);
    let [name_header, address_header, status_header] = HEADERS;

    let mut lines = vec![
        layout.line(name_header, address_header, status_header),
        layout.rule(),
    ];
    lines.extend(
        results
            .iter()
            .map(|r| layout.line(&r.name, &r.address, &status_cell(r.status()))),
    );
    lines
}

fn colored_status(status: Status) -> String {
    let label: ColoredString = match status {
        Status::Up => status.to_string().color(colors::STATUS_UP),
        Status::Down => status.to_string().color(colors::STATUS_DOWN),
    };
    label.bold().to_string()
}

/// The table as printed: colored header, rule and status cells.
fn styled_lines(results: &[ProbeResult]) -> Vec<String> {
    render(results, colored_status)
        .into_iter()
        .enumerate()
        .map(|(idx, line)| match idx {
            0 => line.color(colors::PRIMARY).bold().to_string(),
            1 => line.color(colors::SEPARATOR).to_string(),
            _ => line,
        })
        .collect()
}

pub fn print_results(results: &[ProbeResult]) {
    for line in styled_lines(results) {
        print::print(&line);
    }
}
